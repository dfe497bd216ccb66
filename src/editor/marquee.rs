//! Marquee hit-testing against character bounding boxes.

use crate::grid::Grid;
use crate::layout::GridLayout;
use crate::types::{Glyph, Rect};

/// Source of on-screen bounding boxes for placed characters.
///
/// The grid itself has no notion of where a character is drawn; the
/// rendering side answers that.
pub trait GlyphBounds {
    /// Bounding box of `glyph` sitting in cell `index`, or `None` if it is
    /// not on screen.
    fn glyph_rect(&self, index: usize, glyph: &Glyph) -> Option<Rect>;
}

/// A character fills its cell.
impl GlyphBounds for GridLayout {
    fn glyph_rect(&self, index: usize, _glyph: &Glyph) -> Option<Rect> {
        self.cell_rect(index)
    }
}

impl<F> GlyphBounds for F
where
    F: Fn(usize, &Glyph) -> Option<Rect>,
{
    fn glyph_rect(&self, index: usize, glyph: &Glyph) -> Option<Rect> {
        self(index, glyph)
    }
}

/// Select every character whose box touches `rect`. Never deselects.
///
/// Returns the number of characters hit (already-selected ones included).
pub(crate) fn select_intersecting(grid: &mut Grid, rect: &Rect, bounds: &dyn GlyphBounds) -> usize {
    let hits: Vec<usize> = grid
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            let glyph = cell.as_ref()?;
            let glyph_rect = bounds.glyph_rect(index, glyph)?;
            glyph_rect.intersects(rect).then_some(index)
        })
        .collect();
    for &index in &hits {
        grid.set_selected(index, true);
    }
    hits.len()
}
