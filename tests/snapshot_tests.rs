//! Snapshot and config serialization tests

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::session_with;
use glyphgrid::config::MultiSelectKey;
use glyphgrid::snapshot::GridSnapshot;
use glyphgrid::GridConfig;

#[test]
fn test_snapshot_lists_every_cell() {
    let mut s = session_with(3, 2, "abcd");
    s.click_cell(3, false);
    let snapshot = GridSnapshot::from_grid(s.grid());
    assert_eq!((snapshot.columns, snapshot.rows), (3, 2));
    assert_eq!(snapshot.cell_size, 40.0);
    assert_eq!(snapshot.cells.len(), 6);

    let d = &snapshot.cells[3];
    assert_eq!((d.index, d.row, d.col), (3, 1, 0));
    assert_eq!(d.ch, Some('d'));
    assert!(d.selected);
    assert_eq!(snapshot.cells[5].ch, None);
    assert_eq!(snapshot.occupied().count(), 4);
}

#[test]
fn test_snapshot_json_shape() {
    let s = session_with(2, 1, "x");
    let json = GridSnapshot::from_grid(s.grid()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["columns"], 2);
    assert_eq!(value["rows"], 1);
    assert_eq!(value["cells"][0]["ch"], "x");
    assert_eq!(value["cells"][0]["selected"], false);
    // Empty cells carry no character at all.
    assert!(value["cells"][1].get("ch").is_none());
}

#[test]
fn test_config_partial_json() {
    let config = GridConfig::from_json(r#"{"cell_size": 32, "multi_select": "meta"}"#).unwrap();
    assert_eq!(config.cell_size, 32.0);
    assert_eq!(config.multi_select, MultiSelectKey::Meta);
    assert_eq!(config.drag_threshold, 4.0);
    assert_eq!(config.text_input_id, "text-input");
    assert_eq!(config.submit_button_id, "submit-button");
}

#[test]
fn test_config_repairs_bad_values() {
    let config = GridConfig::from_json(r#"{"cell_size": -5, "font": "  "}"#).unwrap();
    assert_eq!(config.cell_size, 40.0);
    assert_eq!(config.font, GridConfig::default().font);
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(GridConfig::from_json("{cell_size:").is_err());
    assert!(GridConfig::from_json(r#"{"multi_select": "shift"}"#).is_err());
}
