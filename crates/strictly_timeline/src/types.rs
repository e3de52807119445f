//! Core domain types for tic-tac-toe with history.

use serde::{Deserialize, Serialize};

use crate::layout::CELL_COUNT;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark of the player to move at the given history step.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// True when nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol, blank for empty cells.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        }
    }
}

/// Row and column a move was played at, kept for the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Location {
    /// Board row.
    pub row: usize,
    /// Board column.
    pub column: usize,
}

/// Board state after a given move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    cells: [Cell; CELL_COUNT],
    emphasized: [bool; CELL_COUNT],
    location: Option<Location>,
}

impl Snapshot {
    /// The empty board at game start.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            emphasized: [false; CELL_COUNT],
            location: None,
        }
    }

    /// Builds the snapshot that follows `self` once `mark` lands on `index`.
    ///
    /// Only the new cell is emphasized. Caller guarantees `index` is in range.
    pub(crate) fn with_move(&self, index: usize, mark: Mark, location: Location) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(mark);

        let mut emphasized = [false; CELL_COUNT];
        emphasized[index] = true;

        Self {
            cells,
            emphasized,
            location: Some(location),
        }
    }

    /// All cells in linear index order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Emphasis flags: only the most recently placed cell is set.
    pub fn emphasized(&self) -> &[bool; CELL_COUNT] {
        &self.emphasized
    }

    /// True if `index` was the cell placed by this snapshot's move.
    pub fn is_emphasized(&self, index: usize) -> bool {
        self.emphasized.get(index).copied().unwrap_or(false)
    }

    /// Where this snapshot's move was played; `None` for the game start.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
