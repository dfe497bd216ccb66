//! Pointer gesture recognition.
//!
//! Turns raw pointer down/move/up into editor operations:
//! - press on a character, release without moving: click
//! - press on a character, move past the threshold: drag, drop on release
//! - press on an empty cell or outside the grid: marquee
//! - marquee released before it travels past the threshold: click on the
//!   empty cell it started on (clears without the modifier)

use crate::editor::{EditorSession, GlyphBounds};
use crate::types::{Interaction, Point};

/// Default distance a press must travel before it becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 4.0;

/// A press on a character that has not yet turned into a click or a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingPress {
    index: usize,
    origin: Point,
    modifier: bool,
}

/// Per-pointer recognizer state, separate from the editor session.
#[derive(Debug, Clone)]
pub struct GestureState {
    press: Option<PendingPress>,
    drag_origin: Option<Point>,
    pointer: Option<Point>,
    hover: Option<usize>,
    threshold: f32,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl GestureState {
    pub fn new(threshold: f32) -> Self {
        Self {
            press: None,
            drag_origin: None,
            pointer: None,
            hover: None,
            threshold: threshold.max(0.0),
        }
    }

    /// Cell under the pointer while dragging (the drop target).
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// How far the pointer has travelled since the drag started.
    pub fn drag_offset(&self) -> Option<(f32, f32)> {
        let origin = self.drag_origin?;
        let pointer = self.pointer?;
        Some((pointer.x - origin.x, pointer.y - origin.y))
    }

    pub fn has_pending_press(&self) -> bool {
        self.press.is_some()
    }

    /// Pointer pressed. Returns whether the editor needs a redraw.
    pub fn pointer_down(&mut self, session: &mut EditorSession, p: Point, modifier: bool) -> bool {
        // A release we never saw leaves a stale gesture behind.
        let stale = self.reset(session);
        self.pointer = Some(p);

        let cell = session.layout().cell_at_point(p);
        match cell {
            Some(index) if session.grid().is_occupied(index) => {
                self.press = Some(PendingPress {
                    index,
                    origin: p,
                    modifier,
                });
                stale
            }
            _ => {
                session.begin_marquee(p, modifier);
                true
            }
        }
    }

    /// Pointer moved. Returns whether the editor needs a redraw.
    pub fn pointer_move(&mut self, session: &mut EditorSession, p: Point) -> bool {
        self.pointer = Some(p);
        match session.interaction() {
            Interaction::Marqueeing(_) => session.update_marquee(p).is_some(),
            Interaction::Dragging(_) => {
                self.hover = session.layout().cell_at_point(p);
                true
            }
            Interaction::Idle => {
                let Some(press) = self.press else {
                    return false;
                };
                if press.origin.distance(p) < self.threshold {
                    return false;
                }
                self.press = None;
                if session.begin_drag(press.index) {
                    self.drag_origin = Some(press.origin);
                    self.hover = session.layout().cell_at_point(p);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Pointer released. Returns whether the editor needs a redraw.
    pub fn pointer_up(
        &mut self,
        session: &mut EditorSession,
        p: Point,
        bounds: &dyn GlyphBounds,
    ) -> bool {
        self.pointer = Some(p);
        let cell = session.layout().cell_at_point(p);
        match session.interaction() {
            Interaction::Dragging(_) => {
                match cell {
                    Some(target) => {
                        session.drop_on(target);
                    }
                    None => {
                        session.abort_drag();
                    }
                }
                self.drag_origin = None;
                self.hover = None;
                true
            }
            Interaction::Marqueeing(marquee) => {
                let modifier = marquee.additive;
                let anchor = marquee.anchor;
                let travel = anchor.distance(p);
                if travel < self.threshold || travel <= 0.0 {
                    // Never opened into a rectangle: a click where it was pressed.
                    session.cancel_marquee();
                    if let Some(index) = session.layout().cell_at_point(anchor) {
                        session.click_cell(index, modifier);
                    }
                } else {
                    session.update_marquee(p);
                    session.finish_marquee(bounds);
                }
                true
            }
            Interaction::Idle => match self.press.take() {
                Some(press) => session.click_cell(press.index, press.modifier),
                None => false,
            },
        }
    }

    /// Abandon whatever is in progress without applying it.
    ///
    /// Returns whether a gesture was actually cancelled.
    pub fn reset(&mut self, session: &mut EditorSession) -> bool {
        let cancelled = session.abort_drag() | session.cancel_marquee();
        self.press = None;
        self.drag_origin = None;
        self.hover = None;
        cancelled
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;

    fn setup(text: &str) -> (EditorSession, GestureState, GridLayout) {
        let mut session = EditorSession::with_container(160.0, 80.0, 40.0);
        session.place_text(text);
        let layout = *session.layout();
        (session, GestureState::default(), layout)
    }

    #[test]
    fn press_on_glyph_waits_for_threshold() {
        let (mut session, mut gesture, _) = setup("ab");
        assert!(!gesture.pointer_down(&mut session, Point::new(20.0, 20.0), false));
        assert!(gesture.has_pending_press());
        assert!(session.interaction().is_idle());

        assert!(!gesture.pointer_move(&mut session, Point::new(23.0, 20.0)));
        assert!(session.interaction().is_idle());

        assert!(gesture.pointer_move(&mut session, Point::new(24.0, 20.0)));
        assert!(session.interaction().is_dragging());
        assert!(!gesture.has_pending_press());
        assert_eq!(gesture.hover(), Some(0));
        assert_eq!(gesture.drag_offset(), Some((4.0, 0.0)));
    }

    #[test]
    fn press_on_empty_cell_starts_marquee() {
        let (mut session, mut gesture, _) = setup("ab");
        assert!(gesture.pointer_down(&mut session, Point::new(100.0, 60.0), false));
        assert!(session.interaction().is_marqueeing());
        assert!(!gesture.has_pending_press());
        assert_eq!(gesture.pointer(), Some(Point::new(100.0, 60.0)));
    }

    #[test]
    fn release_ends_drag_and_clears_hover() {
        let (mut session, mut gesture, layout) = setup("ab");
        gesture.pointer_down(&mut session, Point::new(20.0, 20.0), false);
        gesture.pointer_move(&mut session, Point::new(140.0, 20.0));
        assert_eq!(gesture.hover(), Some(3));
        assert!(gesture.pointer_up(&mut session, Point::new(140.0, 20.0), &layout));
        assert!(session.interaction().is_idle());
        assert_eq!(gesture.hover(), None);
        assert_eq!(gesture.drag_offset(), None);
        assert_eq!(session.grid().glyph_at(3).unwrap().ch, 'a');
    }

    #[test]
    fn release_without_press_does_nothing() {
        let (mut session, mut gesture, layout) = setup("ab");
        assert!(!gesture.pointer_up(&mut session, Point::new(20.0, 20.0), &layout));
        assert!(session.selected_indices().is_empty());
    }

    #[test]
    fn reset_reports_cancelled_gesture() {
        let (mut session, mut gesture, _) = setup("ab");
        assert!(!gesture.reset(&mut session));
        gesture.pointer_down(&mut session, Point::new(100.0, 60.0), false);
        assert!(gesture.reset(&mut session));
        assert!(session.interaction().is_idle());
    }

    #[test]
    fn zero_threshold_drags_on_any_move() {
        let (mut session, _, _) = setup("ab");
        let mut gesture = GestureState::new(0.0);
        gesture.pointer_down(&mut session, Point::new(20.0, 20.0), false);
        assert!(gesture.pointer_move(&mut session, Point::new(20.0, 20.0)));
        assert!(session.interaction().is_dragging());
    }
}
