//! Marquee selection tests
//!
//! Hit-testing runs against whatever bounding boxes the caller supplies, so
//! these tests use fixed boxes as well as the default cell-sized ones.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use std::collections::HashMap;

use common::session_with;
use glyphgrid::{Glyph, GlyphBounds, Point, Rect};

/// Fixed bounding boxes keyed by cell.
struct FixedBounds(HashMap<usize, Rect>);

impl GlyphBounds for FixedBounds {
    fn glyph_rect(&self, index: usize, _glyph: &Glyph) -> Option<Rect> {
        self.0.get(&index).copied()
    }
}

fn fixed(boxes: &[(usize, Rect)]) -> FixedBounds {
    FixedBounds(boxes.iter().copied().collect())
}

#[test]
fn test_overlap_on_both_axes_selects() {
    let mut s = session_with(4, 1, "ab");
    let bounds = fixed(&[
        (0, Rect::new(10.0, 10.0, 20.0, 20.0)),
        (1, Rect::new(100.0, 10.0, 110.0, 20.0)),
    ]);
    assert!(s.begin_marquee(Point::new(15.0, 0.0), false));
    s.update_marquee(Point::new(25.0, 50.0));
    assert_eq!(s.finish_marquee(&bounds), 1);
    assert_eq!(s.selected_indices(), vec![0]);
    assert!(s.interaction().is_idle());
}

#[test]
fn test_touching_edges_count_as_intersecting() {
    let mut s = session_with(4, 1, "a");
    let bounds = fixed(&[(0, Rect::new(10.0, 10.0, 20.0, 20.0))]);
    s.begin_marquee(Point::new(20.0, 20.0), false);
    s.update_marquee(Point::new(30.0, 30.0));
    assert_eq!(s.finish_marquee(&bounds), 1);
}

#[test]
fn test_drag_direction_does_not_matter() {
    let mut s = session_with(4, 1, "ab");
    let bounds = fixed(&[
        (0, Rect::new(10.0, 10.0, 20.0, 20.0)),
        (1, Rect::new(100.0, 10.0, 110.0, 20.0)),
    ]);
    s.begin_marquee(Point::new(25.0, 50.0), false);
    let rect = s.update_marquee(Point::new(15.0, 0.0)).unwrap();
    assert_eq!(rect, Rect::new(15.0, 0.0, 25.0, 50.0));
    s.finish_marquee(&bounds);
    assert_eq!(s.selected_indices(), vec![0]);
}

#[test]
fn test_glyph_without_bounds_is_skipped() {
    let mut s = session_with(4, 1, "ab");
    let bounds = fixed(&[(1, Rect::new(0.0, 0.0, 500.0, 500.0))]);
    s.begin_marquee(Point::new(0.0, 0.0), false);
    s.update_marquee(Point::new(400.0, 400.0));
    s.finish_marquee(&bounds);
    assert_eq!(s.selected_indices(), vec![1]);
}

#[test]
fn test_cell_bounds_select_touched_cells() {
    let mut s = session_with(4, 2, "abcdefgh");
    s.begin_marquee(Point::new(50.0, 50.0), false);
    s.update_marquee(Point::new(90.0, 70.0));
    assert_eq!(s.finish_marquee_by_cell(), 2);
    assert_eq!(s.selected_indices(), vec![5, 6]);
}

#[test]
fn test_marquee_replaces_selection_without_modifier() {
    let mut s = session_with(4, 2, "abcdefgh");
    s.click_cell(7, false);
    s.begin_marquee(Point::new(5.0, 5.0), false);
    assert!(s.selected_indices().is_empty());
    s.update_marquee(Point::new(10.0, 10.0));
    s.finish_marquee_by_cell();
    assert_eq!(s.selected_indices(), vec![0]);
}

#[test]
fn test_marquee_adds_with_modifier() {
    let mut s = session_with(4, 2, "abcdefgh");
    s.click_cell(7, false);
    s.begin_marquee(Point::new(5.0, 5.0), true);
    s.update_marquee(Point::new(45.0, 10.0));
    s.finish_marquee_by_cell();
    assert_eq!(s.selected_indices(), vec![0, 1, 7]);
}

#[test]
fn test_marquee_never_deselects() {
    let mut s = session_with(4, 1, "ab");
    s.click_cell(0, true);
    s.begin_marquee(Point::new(5.0, 5.0), true);
    s.update_marquee(Point::new(10.0, 10.0));
    s.finish_marquee_by_cell();
    assert_eq!(s.selected_indices(), vec![0]);
}

#[test]
fn test_cancel_marquee_selects_nothing() {
    let mut s = session_with(4, 1, "ab");
    s.begin_marquee(Point::new(0.0, 0.0), false);
    s.update_marquee(Point::new(160.0, 40.0));
    assert!(s.cancel_marquee());
    assert!(s.selected_indices().is_empty());
    assert!(s.interaction().is_idle());
    assert_eq!(s.finish_marquee_by_cell(), 0);
}

#[test]
fn test_marquee_rect_visible_while_active() {
    let mut s = session_with(4, 1, "ab");
    assert!(s.interaction().marquee_rect().is_none());
    s.begin_marquee(Point::new(30.0, 30.0), false);
    s.update_marquee(Point::new(10.0, 5.0));
    assert_eq!(
        s.interaction().marquee_rect(),
        Some(Rect::new(10.0, 5.0, 30.0, 30.0))
    );
}
