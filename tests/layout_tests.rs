//! Grid layout tests
//!
//! Dimensions from container size, row-major index arithmetic, cell
//! rectangles and hit-testing.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use glyphgrid::editor::EditorSession;
use glyphgrid::layout::{GridLayout, DEFAULT_CELL_SIZE, MAX_CELLS};
use glyphgrid::{Point, Rect};
use test_case::test_case;

#[test_case(800.0, 600.0 => (20, 15); "exact multiples")]
#[test_case(819.0, 639.9 => (20, 15); "fractions floor down")]
#[test_case(39.9, 500.0 => (0, 12); "narrower than a cell")]
#[test_case(0.0, 0.0 => (0, 0); "empty container")]
#[test_case(-80.0, 80.0 => (0, 2); "negative width clamps")]
#[test_case(f32::NAN, 80.0 => (0, 2); "nan width clamps")]
fn test_dimensions_from_container(width: f32, height: f32) -> (u32, u32) {
    let layout = GridLayout::from_container(width, height, DEFAULT_CELL_SIZE);
    (layout.columns, layout.rows)
}

#[test]
fn test_default_cell_size_is_forty() {
    assert_eq!(DEFAULT_CELL_SIZE, 40.0);
}

#[test]
fn test_total_is_columns_times_rows() {
    let layout = GridLayout::from_container(400.0, 120.0, 40.0);
    assert_eq!(layout.total(), 30);
    assert!(!layout.is_empty());
    assert!(GridLayout::from_container(400.0, 39.0, 40.0).is_empty());
}

#[test_case(1, 7)]
#[test_case(5, 3)]
#[test_case(13, 9)]
fn test_row_major_bijection(columns: u32, rows: u32) {
    let layout = GridLayout::new(columns, rows, 40.0);
    for index in 0..layout.total() {
        let (row, col) = layout.position(index).unwrap();
        assert_eq!(row as usize, index / columns as usize);
        assert_eq!(col as usize, index % columns as usize);
        assert_eq!(layout.index_of(row, col), Some(index));
        assert_eq!(row as usize * columns as usize + col as usize, index);
    }
}

#[test]
fn test_position_out_of_range() {
    let layout = GridLayout::new(4, 2, 40.0);
    assert_eq!(layout.position(8), None);
    assert_eq!(GridLayout::new(0, 0, 40.0).position(0), None);
}

#[test]
fn test_index_of_rejects_column_overflow() {
    let layout = GridLayout::new(4, 2, 40.0);
    assert_eq!(layout.index_of(0, 4), None);
    assert_eq!(layout.index_of(2, 0), None);
    // linear_index does not check columns: (0, 4) spills to (1, 0).
    assert_eq!(layout.linear_index(0, 4), 4);
    assert_eq!(layout.position(4), Some((1, 0)));
}

#[test]
fn test_cell_rect() {
    let layout = GridLayout::new(4, 3, 40.0);
    assert_eq!(layout.cell_rect(0), Some(Rect::new(0.0, 0.0, 40.0, 40.0)));
    assert_eq!(layout.cell_rect(6), Some(Rect::new(80.0, 40.0, 120.0, 80.0)));
    assert_eq!(layout.cell_rect(12), None);
}

#[test]
fn test_cell_at_point() {
    let layout = GridLayout::new(4, 3, 40.0);
    assert_eq!(layout.cell_at_point(Point::new(0.0, 0.0)), Some(0));
    assert_eq!(layout.cell_at_point(Point::new(39.9, 39.9)), Some(0));
    assert_eq!(layout.cell_at_point(Point::new(40.0, 0.0)), Some(1));
    assert_eq!(layout.cell_at_point(Point::new(85.0, 45.0)), Some(6));
    assert_eq!(layout.cell_at_point(Point::new(160.0, 10.0)), None);
    assert_eq!(layout.cell_at_point(Point::new(10.0, 120.0)), None);
    assert_eq!(layout.cell_at_point(Point::new(-1.0, 10.0)), None);
    assert_eq!(layout.cell_at_point(Point::new(f32::INFINITY, 10.0)), None);
}

#[test]
fn test_grid_extent() {
    let layout = GridLayout::from_container(130.0, 90.0, 40.0);
    assert_eq!(layout.width(), 120.0);
    assert_eq!(layout.height(), 80.0);
}

#[test]
fn test_huge_container_is_clamped() {
    let layout = GridLayout::from_container(1.0e12, 1.0e12, 40.0);
    assert!(layout.total() <= MAX_CELLS);
    assert!(layout.columns > 0);
    assert!(layout.rows > 0);

    let mut session = EditorSession::with_container(1.0e12, 1.0e12, 40.0);
    assert_eq!(session.grid().len(), layout.total());
    assert_eq!(session.place_text("abc"), 3);
}

#[test]
fn test_clamp_keeps_columns_and_drops_rows() {
    let layout = GridLayout::new(1024, 4096, 40.0);
    assert_eq!(layout.columns, 1024);
    assert_eq!(layout.rows as usize, MAX_CELLS / 1024);
    // Small grids are untouched.
    assert_eq!(GridLayout::new(48, 27, 40.0).total(), 48 * 27);
}
