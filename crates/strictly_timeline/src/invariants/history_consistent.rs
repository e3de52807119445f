//! History consistency invariant: snapshot `k` holds exactly `k` marks.

use super::Invariant;
use crate::GameState;

/// Invariant: every snapshot's occupied cell count equals its step.
///
/// The game start is empty and each move fills exactly one cell, so no
/// snapshot can be missing a mark or carry an extra one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .iter()
            .enumerate()
            .all(|(step, snapshot)| snapshot.occupied() == step)
    }

    fn description() -> &'static str {
        "Snapshot at step k has exactly k occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark, Snapshot};

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::new();
        for index in [0, 4, 8, 1] {
            game.apply_move(index, index / 3, index % 3);
        }
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameState::new();
        game.apply_move(4, 1, 1);
        let corrupted = game.history[1].with_move(0, Mark::O, crate::Location::new(0, 0));
        game.history[1] = corrupted;

        assert_eq!(game.history[1].get(0), Some(Cell::Occupied(Mark::O)));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_nonempty_start_violates() {
        let mut game = GameState::new();
        game.history[0] = Snapshot::empty().with_move(0, Mark::X, crate::Location::new(0, 0));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
