//! Rendering for the glyph grid.
//!
//! This module provides:
//! - `FrameData`, a draw list built from editor state (testable natively)
//! - Canvas 2D backend (wasm32 only)
//! - Color parsing utilities

pub mod colors;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use colors::{palette, parse_color, CssColor};
pub use frame::{CellRenderData, FrameData, GhostRenderData};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
