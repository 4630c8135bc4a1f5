// config.rs - Compile-time configuration for the simulation

use std::time::Duration;

pub const GRID_ROWS: usize = 40;                          // Playing area height
pub const GRID_COLUMNS: usize = 40;                       // Playing area width
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;   // Total cell count
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A `(row, column)` pair addressing one cell of the grid.
pub type Position = (usize, usize);

/// Returns true when `(row, column)` lies inside `[0, GRID_ROWS) x [0, GRID_COLUMNS)`.
pub fn in_bounds(row: usize, column: usize) -> bool {
    row < GRID_ROWS && column < GRID_COLUMNS
}

/// Row-major index of an in-bounds position.
pub(crate) fn index_of(row: usize, column: usize) -> usize {
    row * GRID_COLUMNS + column
}
