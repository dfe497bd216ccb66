//! Click selection tests

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::session_with;

#[test]
fn test_click_selects_only_clicked() {
    let mut s = session_with(4, 1, "abc");
    assert!(s.click_cell(1, false));
    assert_eq!(s.selected_indices(), vec![1]);

    assert!(s.click_cell(2, false));
    assert_eq!(s.selected_indices(), vec![2]);
    assert!(!s.grid().is_selected(1));
}

#[test]
fn test_click_clears_multi_selection() {
    let mut s = session_with(4, 1, "abc");
    s.click_cell(0, true);
    s.click_cell(1, true);
    s.click_cell(2, true);
    assert_eq!(s.grid().selection_len(), 3);

    s.click_cell(1, false);
    assert_eq!(s.selected_indices(), vec![1]);
}

#[test]
fn test_modifier_click_toggles() {
    let mut s = session_with(4, 1, "abc");
    s.click_cell(0, false);
    assert!(s.click_cell(2, true));
    assert_eq!(s.selected_indices(), vec![0, 2]);

    assert!(s.click_cell(0, true));
    assert_eq!(s.selected_indices(), vec![2]);
}

#[test]
fn test_click_on_selected_keeps_it_selected() {
    let mut s = session_with(4, 1, "abc");
    s.click_cell(1, false);
    s.click_cell(1, false);
    assert_eq!(s.selected_indices(), vec![1]);
}

#[test]
fn test_click_on_empty_cell_clears() {
    let mut s = session_with(4, 1, "ab");
    s.click_cell(0, true);
    s.click_cell(1, true);
    assert!(s.click_cell(3, false));
    assert!(s.selected_indices().is_empty());
    // Nothing left to clear.
    assert!(!s.click_cell(3, false));
}

#[test]
fn test_modifier_click_on_empty_cell_keeps_selection() {
    let mut s = session_with(4, 1, "ab");
    s.click_cell(0, true);
    assert!(!s.click_cell(3, true));
    assert_eq!(s.selected_indices(), vec![0]);
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let mut s = session_with(2, 1, "ab");
    s.click_cell(0, false);
    assert!(!s.click_cell(2, false));
    assert!(!s.click_cell(usize::MAX, true));
    assert_eq!(s.selected_indices(), vec![0]);
}

#[test]
fn test_clear_selection() {
    let mut s = session_with(3, 1, "abc");
    s.click_cell(0, true);
    s.click_cell(2, true);
    s.clear_selection();
    assert!(s.selected_indices().is_empty());
    assert_eq!(s.grid().glyph_count(), 3);
}

#[test]
fn test_selection_follows_the_character() {
    let mut s = session_with(4, 1, "ab");
    s.click_cell(0, false);
    s.begin_drag(0);
    s.drop_on(3);
    assert_eq!(s.selected_indices(), vec![3]);
    assert_eq!(s.grid().glyph_at(3).unwrap().ch, 'a');
}
