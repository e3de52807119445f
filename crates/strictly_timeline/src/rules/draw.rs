//! Draw detection for tic-tac-toe.

use tracing::instrument;

use super::win::detect;
use crate::layout::CELL_COUNT;
use crate::types::Cell;

/// Checks if every cell is occupied.
#[instrument(level = "trace", skip(cells))]
pub fn is_full(cells: &[Cell; CELL_COUNT]) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

/// A draw is a board of `width * height` moves with no completed line.
///
/// Counted by step rather than by occupied cells: the step reached equals
/// the number of moves played to get there.
#[instrument(level = "trace", skip(cells))]
pub fn is_draw(cells: &[Cell; CELL_COUNT], step: usize, width: usize, height: usize) -> bool {
    width * height == step && detect(cells).is_none()
}
