//! glyphgrid - glyph grid editor for the web
//!
//! Lays out a grid of fixed-size cells sized to its container and fills it
//! with typed text, one character per cell. Characters can then be
//! rearranged in the browser via WebAssembly and Canvas 2D:
//! - Click and modifier-click selection
//! - Drag and drop with swap-on-occupied cells
//! - Group drags that keep the selection's relative layout
//! - Rubber-band (marquee) selection
//!
//! The grid model and gesture logic are plain Rust and run natively too.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GlyphGrid } from 'glyphgrid';
//! await init();
//! const grid = new GlyphGrid('main-container', { cell_size: 40 });
//! grid.place_text('hello world');
//! ```

// Core
pub mod config;
pub mod editor;
pub mod error;
pub mod gesture;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod snapshot;
pub mod types;

// Browser surface (Canvas 2D)
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main editor struct
pub use viewer::GlyphGrid;

pub use config::GridConfig;
pub use editor::{EditorSession, GlyphBounds};
pub use types::*;

/// Lay out a grid for a container and place `text` in it, returning the
/// resulting `GridSnapshot` as a JSON string.
///
/// # Errors
/// Returns an error if the snapshot cannot be serialized.
#[wasm_bindgen]
pub fn layout_text(width: f32, height: f32, cell_size: f32, text: &str) -> Result<String, JsValue> {
    let mut session = EditorSession::with_container(width, height, cell_size);
    session.place_text(text);
    snapshot::GridSnapshot::from_grid(session.grid())
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
