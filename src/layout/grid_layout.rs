//! Uniform cell grid sized to a container.
//!
//! Cells are square, `cell_size` logical pixels wide, laid out row-major:
//! `index = row * columns + col`.

use crate::types::{Point, Rect};

/// Default cell edge length in logical pixels.
pub const DEFAULT_CELL_SIZE: f32 = 40.0;

/// Upper bound on `columns * rows`. Larger containers are clamped.
pub const MAX_CELLS: usize = 1 << 20;

/// Number of whole cells of size `cell` that fit in `extent`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_cells(extent: f32, cell: f32) -> u32 {
    if !extent.is_finite() || extent <= 0.0 || !cell.is_finite() || cell <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates, so oversized containers clamp to u32::MAX.
    (extent / cell).floor() as u32
}

/// Keep all columns (up to the cap) and drop rows until the grid fits.
fn clamp_cells(columns: u32, rows: u32) -> (u32, u32) {
    let cap = u32::try_from(MAX_CELLS).unwrap_or(u32::MAX);
    let columns_fit = columns.min(cap);
    let rows_fit = match cap.checked_div(columns_fit) {
        Some(max_rows) => rows.min(max_rows),
        None => rows,
    };
    if (columns_fit, rows_fit) != (columns, rows) {
        log::warn!(
            "grid {columns}x{rows} over {MAX_CELLS} cells, clamped to {columns_fit}x{rows_fit}"
        );
    }
    (columns_fit, rows_fit)
}

/// Grid dimensions computed from a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Number of columns (`floor(width / cell_size)`)
    pub columns: u32,
    /// Number of rows (`floor(height / cell_size)`)
    pub rows: u32,
    /// Cell edge length in logical pixels
    pub cell_size: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_CELL_SIZE)
    }
}

impl GridLayout {
    /// Grid of `columns` x `rows`, clamped to at most [`MAX_CELLS`] cells.
    pub fn new(columns: u32, rows: u32, cell_size: f32) -> Self {
        let (columns, rows) = clamp_cells(columns, rows);
        Self {
            columns,
            rows,
            cell_size,
        }
    }

    /// Fit as many whole cells as possible into a `width` x `height` container.
    ///
    /// Non-finite or negative sizes produce an empty grid.
    pub fn from_container(width: f32, height: f32, cell_size: f32) -> Self {
        Self::new(
            whole_cells(width, cell_size),
            whole_cells(height, cell_size),
            cell_size,
        )
    }

    /// Total number of cells.
    pub fn total(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Linear index of `(row, col)` without bounds checks on the column.
    ///
    /// A column past the right edge spills onto the following row. Group
    /// drops rely on this to address destinations by index alone.
    pub fn linear_index(&self, row: u32, col: u32) -> usize {
        (row as usize)
            .saturating_mul(self.columns as usize)
            .saturating_add(col as usize)
    }

    /// Index of `(row, col)` if both lie inside the grid.
    pub fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.rows && col < self.columns).then(|| self.linear_index(row, col))
    }

    /// `(row, col)` of a valid index.
    pub fn position(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.total() {
            return None;
        }
        let columns = self.columns as usize;
        let row = u32::try_from(index / columns).ok()?;
        let col = u32::try_from(index % columns).ok()?;
        Some((row, col))
    }

    /// Bounding rectangle of a cell in container coordinates.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        let (row, col) = self.position(index)?;
        Some(Rect::from_origin_size(
            col as f32 * self.cell_size,
            row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        ))
    }

    /// Cell under a point, if any.
    pub fn cell_at_point(&self, p: Point) -> Option<usize> {
        if p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        let col = whole_cells(p.x, self.cell_size);
        let row = whole_cells(p.y, self.cell_size);
        self.index_of(row, col)
    }

    /// Total grid width in logical pixels.
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    /// Total grid height in logical pixels.
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }
}
