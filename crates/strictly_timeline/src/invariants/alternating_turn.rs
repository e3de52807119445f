//! Alternating turn invariant: consecutive snapshots differ by one mark of
//! the right player.

use super::Invariant;
use crate::GameState;
use crate::types::{Cell, Mark};

/// Invariant: snapshot `k` equals snapshot `k - 1` plus one mark placed by
/// the player whose turn it was at step `k - 1`.
///
/// X therefore fills odd-numbered moves and O even-numbered ones.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).enumerate().all(|(step, pair)| {
            let expected = Cell::Occupied(Mark::for_step(step));
            let mut added = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(before, after)| before != after);

            matches!(
                (added.next(), added.next()),
                (Some((Cell::Empty, after)), None) if *after == expected
            )
        })
    }

    fn description() -> &'static str {
        "Each move adds one mark for the player to move"
    }
}
