//! Application state and logic.

use strictly_timeline::{Command, GameState, GameView, MoveOutcome};
use tracing::{debug, instrument, warn};

use crate::input::Action;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board grid.
    Board,
    /// The move list.
    History,
}

/// Main application state.
///
/// Owns the game and the cursor state; every change to the game goes
/// through [`GameState::dispatch`].
#[derive(Debug)]
pub struct App {
    game: GameState,
    focus: Focus,
    cursor: (usize, usize),
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a game.
    pub fn new(game: GameState) -> Self {
        Self {
            selected: game.current_step(),
            game,
            focus: Focus::Board,
            cursor: (0, 0),
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// View of the displayed step.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.game)
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cursor as (display row, display column).
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        self.message = None;

        match (action, self.focus) {
            (Action::Quit, _) => self.should_quit = true,
            (Action::SwitchFocus, Focus::Board) => {
                self.focus = Focus::History;
                self.selected = self.game.current_step();
            }
            (Action::SwitchFocus, Focus::History) => self.focus = Focus::Board,
            (Action::ToggleSort, _) => self.send(Command::ToggleSort),
            (Action::Select(position), _) => {
                let width = self.game.width();
                self.cursor = (position / width, position % width);
                self.click_cursor();
            }
            (Action::Activate, Focus::Board) => self.click_cursor(),
            (Action::Activate, Focus::History) => {
                if let Some(entry) = self.view().moves.get(self.selected) {
                    self.send(entry.select());
                }
            }
            (Action::Up, Focus::Board) => self.cursor.0 = self.cursor.0.saturating_sub(1),
            (Action::Down, Focus::Board) => {
                self.cursor.0 = (self.cursor.0 + 1).min(self.game.height() - 1);
            }
            (Action::Left, Focus::Board) => self.cursor.1 = self.cursor.1.saturating_sub(1),
            (Action::Right, Focus::Board) => {
                self.cursor.1 = (self.cursor.1 + 1).min(self.game.width() - 1);
            }
            (Action::Up, Focus::History) => self.selected = self.selected.saturating_sub(1),
            (Action::Down, Focus::History) => {
                self.selected = (self.selected + 1).min(self.game.history().len() - 1);
            }
            (Action::Left | Action::Right, Focus::History) => {}
        }
    }

    fn click_cursor(&mut self) {
        let (row, column) = self.cursor;
        if let Some(cell) = self.view().cell_at(row, column) {
            self.send(cell.click());
        }
    }

    fn send(&mut self, command: Command) {
        // Sorting leaves the displayed step, and so the selection, alone.
        let moves_step = !matches!(command, Command::ToggleSort);
        match self.game.dispatch(command) {
            Ok(Some(MoveOutcome::Ignored(reason))) => {
                debug!(%reason, "Click had no effect");
                self.message = Some(format!("Ignored: {}", reason));
            }
            Ok(_) if moves_step => self.selected = self.game.current_step(),
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Command rejected");
                self.message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timeline::{Cell, Mark, Status};

    fn app() -> App {
        App::new(GameState::new())
    }

    #[test]
    fn test_select_places_mark_at_display_position() {
        let mut app = app();
        app.handle(Action::Select(4));

        assert_eq!(app.game().current().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.cursor(), (1, 1));
        assert_eq!(app.view().status, Status::NextPlayer(Mark::O));
    }

    #[test]
    fn test_select_respects_sort_order() {
        let mut app = app();
        app.handle(Action::Select(0));

        // Top-left on screen is cell 8 in the default ascending order.
        assert_eq!(app.game().current().get(8), Some(Cell::Occupied(Mark::X)));
        assert_eq!(app.view().moves[1].label, "Go to move #1 (x: 2 y: 2)");

        app.handle(Action::ToggleSort);
        app.handle(Action::Select(0));
        assert_eq!(app.game().current().get(0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(app.view().moves[2].label, "Go to move #2 (x: 0 y: 0)");
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = app();
        app.handle(Action::Up);
        app.handle(Action::Left);
        assert_eq!(app.cursor(), (0, 0));

        for _ in 0..5 {
            app.handle(Action::Down);
            app.handle(Action::Right);
        }
        assert_eq!(app.cursor(), (2, 2));
    }

    #[test]
    fn test_occupied_click_reports_message() {
        let mut app = app();
        app.handle(Action::Select(0));
        app.handle(Action::Select(0));

        assert_eq!(app.message(), Some("Ignored: cell 8 is occupied"));
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = app();
        app.handle(Action::Select(0));
        app.handle(Action::Select(1));
        app.handle(Action::Select(2));

        app.handle(Action::SwitchFocus);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        app.handle(Action::Up);
        app.handle(Action::Up);
        app.handle(Action::Activate);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);

        app.handle(Action::Down);
        app.handle(Action::Down);
        app.handle(Action::Down);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_move_after_jump_truncates_and_resyncs_selection() {
        let mut app = app();
        for position in [0, 1, 2, 3] {
            app.handle(Action::Select(position));
        }
        app.handle(Action::SwitchFocus);
        for _ in 0..4 {
            app.handle(Action::Up);
        }
        app.handle(Action::Activate);
        assert_eq!(app.game().current_step(), 0);

        app.handle(Action::SwitchFocus);
        app.handle(Action::Select(8));
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_toggle_sort_keeps_history_selection() {
        let mut app = app();
        app.handle(Action::Select(0));
        app.handle(Action::Select(1));

        app.handle(Action::SwitchFocus);
        app.handle(Action::Up);
        assert_eq!(app.selected(), 1);

        app.handle(Action::ToggleSort);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.game().current_step(), 2);
        assert_eq!(app.view().sort_label, "desc");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
