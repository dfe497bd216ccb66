//! Shared helpers for the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use glyphgrid::editor::EditorSession;
use glyphgrid::grid::Grid;

pub const CELL: f32 = 40.0;

/// Session whose grid is exactly `columns` x `rows`.
pub fn session(columns: u32, rows: u32) -> EditorSession {
    EditorSession::with_container(columns as f32 * CELL, rows as f32 * CELL, CELL)
}

/// Session of `columns` x `rows` with `text` placed.
pub fn session_with(columns: u32, rows: u32, text: &str) -> EditorSession {
    let mut s = session(columns, rows);
    s.place_text(text);
    s
}

/// Grid rows as strings, `.` for empty cells.
pub fn rows(session: &EditorSession) -> Vec<String> {
    session.grid().rows_text('.')
}

/// Rows joined with `/` for compact assertions.
pub fn picture(session: &EditorSession) -> String {
    rows(session).join("/")
}

/// Character in a cell.
pub fn ch_at(grid: &Grid, index: usize) -> Option<char> {
    grid.glyph_at(index).map(|g| g.ch)
}
