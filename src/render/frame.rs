//! Backend-independent draw list.
//!
//! Building the frame is plain Rust so what gets painted can be tested
//! without a canvas.

use crate::editor::EditorSession;
use crate::gesture::GestureState;
use crate::types::Rect;

/// Data needed to paint a single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRenderData {
    pub index: usize,
    pub rect: Rect,
    pub ch: Option<char>,
    pub selected: bool,
    /// The character is being carried by the active drag.
    pub dragging: bool,
    /// The cell is the current drop target.
    pub drop_target: bool,
}

/// A dragged character following the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostRenderData {
    pub rect: Rect,
    pub ch: char,
}

/// Everything the backend needs for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameData {
    /// Grid width in logical pixels
    pub width: f32,
    /// Grid height in logical pixels
    pub height: f32,
    pub cell_size: f32,
    pub cells: Vec<CellRenderData>,
    pub ghosts: Vec<GhostRenderData>,
    pub marquee: Option<Rect>,
}

impl FrameData {
    pub fn build(session: &EditorSession, gesture: &GestureState) -> Self {
        let layout = *session.layout();
        let grid = session.grid();
        let dragged = session.dragged_indices();
        let drop_target = if session.interaction().is_dragging() {
            gesture.hover()
        } else {
            None
        };

        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let rect = layout.cell_rect(index)?;
                Some(CellRenderData {
                    index,
                    rect,
                    ch: cell.as_ref().map(|g| g.ch),
                    selected: cell.as_ref().is_some_and(|g| g.selected),
                    dragging: dragged.contains(&index),
                    drop_target: drop_target == Some(index),
                })
            })
            .collect();

        let ghosts = match gesture.drag_offset() {
            Some((dx, dy)) => dragged
                .iter()
                .filter_map(|&index| {
                    let glyph = grid.glyph_at(index)?;
                    let rect = layout.cell_rect(index)?.translate(dx, dy);
                    Some(GhostRenderData { rect, ch: glyph.ch })
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            width: layout.width(),
            height: layout.height(),
            cell_size: layout.cell_size,
            cells,
            ghosts,
            marquee: session.interaction().marquee_rect(),
        }
    }
}
