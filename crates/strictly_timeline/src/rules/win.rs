//! Win detection for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::layout::CELL_COUNT;
use crate::types::{Cell, Mark};

/// Winning triples, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// Winning mark.
    pub mark: Mark,
    /// Indices of the three cells in the line.
    pub line: [usize; 3],
}

impl Win {
    /// True if `index` lies on the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` when no triple holds three equal marks.
#[instrument(level = "trace", skip(cells))]
pub fn detect(cells: &[Cell; CELL_COUNT]) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
            Some(Win::new(mark, [a, b, c]))
        }
        _ => None,
    })
}
