use super::{GlyphId, Point, Rect};

/// One selected character captured at drag start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMember {
    pub glyph: GlyphId,
    pub row: u32,
    pub col: u32,
}

/// Snapshot of a multi-character drag.
///
/// `members` keeps selection-snapshot order (row-major cell order); drops
/// are applied in that order. `base` is `(min row, min col)` over all members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDrag {
    pub members: Vec<GroupMember>,
    pub base: (u32, u32),
}

impl GroupDrag {
    /// Build a group from captured members. Returns `None` for an empty set.
    pub fn new(members: Vec<GroupMember>) -> Option<Self> {
        let min_row = members.iter().map(|m| m.row).min()?;
        let min_col = members.iter().map(|m| m.col).min()?;
        Some(Self {
            members,
            base: (min_row, min_col),
        })
    }

    /// `(row, col)` offset of a member from the group base.
    pub fn offset_of(&self, member: &GroupMember) -> (u32, u32) {
        (
            member.row.saturating_sub(self.base.0),
            member.col.saturating_sub(self.base.1),
        )
    }

    pub fn contains(&self, id: GlyphId) -> bool {
        self.members.iter().any(|m| m.glyph == id)
    }
}

/// What is being carried by an active drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A lone character.
    Single(GlyphId),
    /// Several selected characters moving together.
    Group(GroupDrag),
}

impl DragPayload {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Group(g) => g.members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rubber-band selection rectangle: fixed anchor, live current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    pub anchor: Point,
    pub current: Point,
    /// Whether the gesture started with the multi-select modifier held.
    pub additive: bool,
}

impl Marquee {
    pub fn new(anchor: Point, additive: bool) -> Self {
        Self {
            anchor,
            current: anchor,
            additive,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_points(self.anchor, self.current)
    }
}

/// The active pointer interaction. Only one gesture runs at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragPayload),
    Marqueeing(Marquee),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_marqueeing(&self) -> bool {
        matches!(self, Self::Marqueeing(_))
    }

    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::Marqueeing(m) => Some(m.rect()),
            _ => None,
        }
    }
}

/// Result of a drop, reported for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing changed (no drag, same cell, bad target).
    Ignored,
    /// A single character moved into an empty cell.
    Moved,
    /// A single character swapped places with the target's occupant.
    Swapped,
    /// A group drop; `skipped` members had out-of-bounds destinations.
    Group { moved: usize, skipped: usize },
}
