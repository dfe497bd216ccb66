use serde::Serialize;

/// Stable identity of a placed character.
///
/// Ids are handed out in placement order and survive moves, so a character
/// can be followed across swaps and displacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GlyphId(pub u32);

/// A single character sitting in a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub id: GlyphId,
    pub ch: char,
    pub selected: bool,
}

impl Glyph {
    pub fn new(id: GlyphId, ch: char) -> Self {
        Self {
            id,
            ch,
            selected: false,
        }
    }
}
