//! Data types for the glyph grid.

mod glyph;
mod interaction;
mod rect;

pub use glyph::*;
pub use interaction::*;
pub use rect::*;
