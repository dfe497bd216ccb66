//! Layout engine for the glyph grid.
//!
//! This module handles:
//! - Sizing the grid from the container and a fixed cell size
//! - Row-major index arithmetic
//! - Cell rectangles and point hit-testing

mod grid_layout;

pub use grid_layout::{GridLayout, DEFAULT_CELL_SIZE, MAX_CELLS};
