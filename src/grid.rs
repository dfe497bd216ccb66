//! Grid model: which cell holds which character, and which are selected.
//!
//! Every cell is an `Option<Glyph>`, so a cell can never hold more than one
//! character. Selection is a flag on the glyph itself.

use crate::layout::GridLayout;
use crate::types::{Glyph, GlyphId};

/// Cell storage for one grid.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    layout: GridLayout,
    cells: Vec<Option<Glyph>>,
    next_id: u32,
}

impl Grid {
    /// Create an empty grid with the given dimensions.
    pub fn new(layout: GridLayout) -> Self {
        let mut grid = Self::default();
        grid.rebuild(layout);
        grid
    }

    /// Replace the layout and drop every cell and character.
    pub fn rebuild(&mut self, layout: GridLayout) {
        self.layout = layout;
        self.cells.clear();
        self.cells.resize(layout.total(), None);
        self.next_id = 0;
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Option<Glyph>] {
        &self.cells
    }

    /// Glyph in a cell, `None` if empty or out of range.
    pub fn glyph_at(&self, index: usize) -> Option<&Glyph> {
        self.cells.get(index).and_then(Option::as_ref)
    }

    fn glyph_at_mut(&mut self, index: usize) -> Option<&mut Glyph> {
        self.cells.get_mut(index).and_then(Option::as_mut)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.glyph_at(index).is_some()
    }

    /// Current cell of a glyph.
    pub fn position_of(&self, id: GlyphId) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.as_ref().is_some_and(|g| g.id == id))
    }

    /// Number of placed characters.
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Remove every character, keeping the cells.
    pub fn clear_glyphs(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.next_id = 0;
    }

    /// Clear all characters, then put `text`'s i-th char into cell i.
    ///
    /// Characters past the grid capacity are dropped. Returns how many were
    /// placed.
    pub fn place_text(&mut self, text: &str) -> usize {
        self.clear_glyphs();
        let mut placed = 0;
        for (cell, ch) in self.cells.iter_mut().zip(text.chars()) {
            *cell = Some(Glyph::new(GlyphId(self.next_id), ch));
            self.next_id = self.next_id.saturating_add(1);
            placed += 1;
        }
        placed
    }

    /// Exchange the contents of two cells. Either may be empty.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.cells.len() || b >= self.cells.len() {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    // ---- Selection ----

    pub fn clear_selection(&mut self) {
        for glyph in self.cells.iter_mut().flatten() {
            glyph.selected = false;
        }
    }

    /// Select the glyph in `index` and deselect everything else.
    pub fn select_only(&mut self, index: usize) -> bool {
        if !self.is_occupied(index) {
            return false;
        }
        self.clear_selection();
        self.set_selected(index, true)
    }

    /// Flip the selection flag of the glyph in `index`.
    pub fn toggle_selected(&mut self, index: usize) -> bool {
        match self.glyph_at_mut(index) {
            Some(glyph) => {
                glyph.selected = !glyph.selected;
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.glyph_at_mut(index) {
            Some(glyph) => {
                glyph.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.glyph_at(index).is_some_and(|g| g.selected)
    }

    /// Selected glyphs with their cell index, in row-major cell order.
    pub fn selected(&self) -> impl Iterator<Item = (usize, &Glyph)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.as_ref().filter(|g| g.selected).map(|g| (i, g)))
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected().map(|(i, _)| i).collect()
    }

    pub fn selection_len(&self) -> usize {
        self.selected().count()
    }

    /// Grid contents as one string per row, empty cells rendered as `empty`.
    pub fn rows_text(&self, empty: char) -> Vec<String> {
        let columns = self.layout.columns as usize;
        if columns == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map_or(empty, |g| g.ch))
                    .collect()
            })
            .collect()
    }
}
