//! Board geometry: dimensions and row/column to cell index mapping.

use tracing::instrument;

use crate::types::Location;

/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 3;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 3;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Linear cell index for a row and column.
///
/// Computed as `row * 2 + column + row`, which is row-major for three
/// columns per row.
#[instrument(level = "trace")]
pub fn cell_index(row: usize, column: usize) -> usize {
    row * 2 + column + row
}

/// Inverse of [`cell_index`] for indices on the board.
pub fn location_of(index: usize) -> Option<Location> {
    (index < CELL_COUNT).then(|| Location::new(index / BOARD_WIDTH, index % BOARD_WIDTH))
}

/// Every location on the board in natural row-major order.
pub fn locations() -> impl Iterator<Item = Location> {
    (0..BOARD_HEIGHT).flat_map(|row| (0..BOARD_WIDTH).map(move |column| Location::new(row, column)))
}
