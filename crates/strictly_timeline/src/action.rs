//! Commands sent from the renderer into the game state.
//!
//! Every user interaction becomes one of these values and goes through
//! [`GameState::dispatch`](crate::GameState::dispatch). Handlers never close
//! over cell indices themselves.

use serde::{Deserialize, Serialize};

use crate::types::Mark;

/// A user intent aimed at the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "kind")]
pub enum Command {
    /// A cell was selected.
    #[display("click #{} ({}, {})", index, row, column)]
    Click {
        /// Linear cell index.
        index: usize,
        /// Row shown in the move list.
        row: usize,
        /// Column shown in the move list.
        column: usize,
    },
    /// A history entry was selected.
    #[display("jump to step {}", step)]
    JumpTo {
        /// History step to display.
        step: usize,
    },
    /// The sort-order button was pressed.
    #[display("toggle sort")]
    ToggleSort,
}

/// Why a click left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IgnoreReason {
    /// The displayed board already has a winner.
    #[display("game already won")]
    GameWon,
    /// The target cell holds a mark.
    #[display("cell {} is occupied", _0)]
    Occupied(usize),
    /// The index is off the board.
    #[display("cell {} is off the board", _0)]
    OutOfRange(usize),
}

/// Result of a click.
///
/// Ignored clicks are not errors; the game simply does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The mark was placed and history advanced.
    Placed(Mark),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// True if the click changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
