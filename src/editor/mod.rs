//! Editing session: the grid plus the gesture currently in progress.
//!
//! `EditorSession` is the single owner of mutable editor state. Input
//! handlers receive it by `&mut` and call one operation per event:
//! - `click_cell` for plain and modifier clicks
//! - `begin_drag` / `drop_on` / `abort_drag` for drag and drop
//! - `begin_marquee` / `update_marquee` / `finish_marquee` for rubber-band selection
//!
//! Nothing here fails. Operations that do not apply in the current state are
//! no-ops and report so through their return value.

mod drag;
mod marquee;

pub use marquee::GlyphBounds;

use crate::grid::Grid;
use crate::layout::{GridLayout, DEFAULT_CELL_SIZE};
use crate::types::{DragPayload, DropOutcome, Interaction, Marquee, Point, Rect};

/// Grid state and active interaction for one editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: Grid,
    interaction: Interaction,
    cell_size: f32,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl EditorSession {
    /// Create a session with an empty 0x0 grid. Call [`Self::rebuild`]
    /// before anything else.
    pub fn new(cell_size: f32) -> Self {
        Self {
            grid: Grid::new(GridLayout::new(0, 0, cell_size)),
            interaction: Interaction::Idle,
            cell_size,
        }
    }

    /// Create a session already laid out for a container.
    pub fn with_container(width: f32, height: f32, cell_size: f32) -> Self {
        let mut session = Self::new(cell_size);
        session.rebuild(width, height);
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn layout(&self) -> &GridLayout {
        self.grid.layout()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Recompute the grid for a container size. Hard reset: every character
    /// is discarded and any gesture is dropped.
    pub fn rebuild(&mut self, width: f32, height: f32) -> GridLayout {
        let layout = GridLayout::from_container(width, height, self.cell_size);
        self.grid.rebuild(layout);
        self.interaction = Interaction::Idle;
        log::info!(
            "grid rebuilt: {} x {} ({} cells)",
            layout.columns,
            layout.rows,
            layout.total()
        );
        layout
    }

    /// Replace all characters with `text`, one per cell. Returns the number placed.
    pub fn place_text(&mut self, text: &str) -> usize {
        self.interaction = Interaction::Idle;
        let placed = self.grid.place_text(text);
        let dropped = text.chars().count().saturating_sub(placed);
        if dropped > 0 {
            log::info!("placed {placed} characters, {dropped} beyond grid capacity dropped");
        } else {
            log::info!("placed {placed} characters");
        }
        placed
    }

    // ---- Selection ----

    /// Handle a click on a cell.
    ///
    /// Without the modifier the clicked character becomes the only selection
    /// (an empty cell clears it). With the modifier the character's flag is
    /// toggled and an empty cell does nothing. Returns whether anything changed.
    pub fn click_cell(&mut self, index: usize, modifier: bool) -> bool {
        if index >= self.grid.len() {
            return false;
        }
        match (self.grid.is_occupied(index), modifier) {
            (true, true) => self.grid.toggle_selected(index),
            (true, false) => self.grid.select_only(index),
            (false, false) => {
                let had_selection = self.grid.selection_len() > 0;
                self.grid.clear_selection();
                had_selection
            }
            (false, true) => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.grid.clear_selection();
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.grid.selected_indices()
    }

    // ---- Drag and drop ----

    /// Start dragging the character in `index`.
    ///
    /// An unselected character first becomes the only selection. With more
    /// than one character selected the whole selection is captured as a
    /// group. Refused while another gesture is active or the cell is empty.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        let Some(glyph) = self.grid.glyph_at(index) else {
            return false;
        };
        let (id, selected) = (glyph.id, glyph.selected);
        if !selected {
            self.grid.select_only(index);
        }
        let payload = match drag::capture_group(&self.grid) {
            Some(group) => DragPayload::Group(group),
            None => DragPayload::Single(id),
        };
        log::debug!("drag started from cell {index} carrying {}", payload.len());
        self.interaction = Interaction::Dragging(payload);
        true
    }

    /// Drop the dragged character(s) on `target` and end the drag.
    pub fn drop_on(&mut self, target: usize) -> DropOutcome {
        let Interaction::Dragging(payload) = std::mem::take(&mut self.interaction) else {
            return DropOutcome::Ignored;
        };
        let outcome = match &payload {
            DragPayload::Single(id) => drag::drop_single(&mut self.grid, *id, target),
            DragPayload::Group(group) => drag::drop_group(&mut self.grid, group, target),
        };
        log::debug!("drop on cell {target}: {outcome:?}");
        outcome
    }

    /// End a drag without moving anything.
    pub fn abort_drag(&mut self) -> bool {
        if self.interaction.is_dragging() {
            log::debug!("drag aborted");
            self.interaction = Interaction::Idle;
            true
        } else {
            false
        }
    }

    /// Payload of the active drag.
    pub fn drag_payload(&self) -> Option<&DragPayload> {
        match &self.interaction {
            Interaction::Dragging(payload) => Some(payload),
            _ => None,
        }
    }

    /// Current cells of the characters being dragged.
    pub fn dragged_indices(&self) -> Vec<usize> {
        match self.drag_payload() {
            Some(DragPayload::Single(id)) => self.grid.position_of(*id).into_iter().collect(),
            Some(DragPayload::Group(group)) => group
                .members
                .iter()
                .filter_map(|m| self.grid.position_of(m.glyph))
                .collect(),
            None => Vec::new(),
        }
    }

    // ---- Marquee ----

    /// Anchor a marquee at `point`. Clears the selection unless `modifier`
    /// is held. Refused while another gesture is active.
    pub fn begin_marquee(&mut self, point: Point, modifier: bool) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        if !modifier {
            self.grid.clear_selection();
        }
        self.interaction = Interaction::Marqueeing(Marquee::new(point, modifier));
        true
    }

    /// Stretch the marquee to `point`, returning the new rectangle.
    pub fn update_marquee(&mut self, point: Point) -> Option<Rect> {
        match &mut self.interaction {
            Interaction::Marqueeing(marquee) => {
                marquee.current = point;
                Some(marquee.rect())
            }
            _ => None,
        }
    }

    /// Close the marquee and add every character it touches to the selection.
    ///
    /// Returns how many characters the rectangle hit.
    pub fn finish_marquee(&mut self, bounds: &dyn GlyphBounds) -> usize {
        let Some(rect) = self.interaction.marquee_rect() else {
            return 0;
        };
        self.interaction = Interaction::Idle;
        let hits = marquee::select_intersecting(&mut self.grid, &rect, bounds);
        log::debug!("marquee {rect:?} hit {hits} characters");
        hits
    }

    /// [`Self::finish_marquee`] with characters filling their cells.
    pub fn finish_marquee_by_cell(&mut self) -> usize {
        let layout = *self.grid.layout();
        self.finish_marquee(&layout)
    }

    /// Discard the marquee without selecting.
    pub fn cancel_marquee(&mut self) -> bool {
        if self.interaction.is_marqueeing() {
            self.interaction = Interaction::Idle;
            true
        } else {
            false
        }
    }
}
