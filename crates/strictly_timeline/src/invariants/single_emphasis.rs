//! Emphasis invariant: only the last-placed cell is emphasized.

use super::Invariant;
use crate::GameState;

/// Invariant: the start snapshot has no emphasis and no location; every
/// later snapshot emphasizes exactly one occupied cell and records where it
/// was played.
pub struct SingleEmphasisInvariant;

impl Invariant<GameState> for SingleEmphasisInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.iter().enumerate().all(|(step, snapshot)| {
            let mut marked = snapshot
                .emphasized()
                .iter()
                .enumerate()
                .filter_map(|(index, flag)| flag.then_some(index));

            match (step, marked.next(), marked.next()) {
                (0, None, _) => snapshot.location().is_none(),
                (0, Some(_), _) => false,
                (_, Some(index), None) => {
                    snapshot.location().is_some()
                        && snapshot.get(index).is_some_and(|cell| !cell.is_empty())
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Exactly one emphasized cell per move"
    }
}
