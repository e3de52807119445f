//! Step bound invariant: the displayed step exists.

use super::Invariant;
use crate::GameState;

/// Invariant: history is non-empty and `current_step` indexes into it.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history.is_empty() && game.current_step < game.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.current_step = 1;
        assert!(!StepInBoundsInvariant::holds(&game));
    }
}
