//! Canvas 2D rendering backend.
//!
//! Paints a [`FrameData`](super::FrameData) with the HTML Canvas 2D API via
//! web-sys: grid lines, cell fills, glyphs, drag ghosts and the marquee.

mod renderer;

pub use renderer::CanvasRenderer;
