//! Serializable view of the grid for rendering layers and tooling.

use serde::Serialize;

use crate::error::Result;
use crate::grid::Grid;

/// One cell of a [`GridSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ch: Option<char>,
    pub selected: bool,
}

/// Every cell with its character (if any) and selection flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub cells: Vec<CellSnapshot>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        let layout = *grid.layout();
        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                let (row, col) = layout.position(index)?;
                Some(CellSnapshot {
                    index,
                    row,
                    col,
                    ch: cell.as_ref().map(|g| g.ch),
                    selected: cell.as_ref().is_some_and(|g| g.selected),
                })
            })
            .collect();
        Self {
            columns: layout.columns,
            rows: layout.rows,
            cell_size: layout.cell_size,
            cells,
        }
    }

    /// Cells that hold a character.
    pub fn occupied(&self) -> impl Iterator<Item = &CellSnapshot> + '_ {
        self.cells.iter().filter(|c| c.ch.is_some())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
