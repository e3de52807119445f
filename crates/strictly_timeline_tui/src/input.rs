//! Key bindings.

use crossterm::event::KeyCode;

/// Something the user asked the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Cursor or selection up.
    Up,
    /// Cursor or selection down.
    Down,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Click the cell under the cursor or jump to the selected move.
    Activate,
    /// Click the cell at a display position (0-8, row-major on screen).
    Select(usize),
    /// Move focus between the board and the move list.
    SwitchFocus,
    /// Flip row/column order.
    ToggleSort,
}

/// Maps a key to an action, if it is bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Select(d as usize - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_display_positions() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Select(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Select(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_arrows_and_vim_keys_agree() {
        assert_eq!(action_for(KeyCode::Up), action_for(KeyCode::Char('k')));
        assert_eq!(action_for(KeyCode::Right), action_for(KeyCode::Char('l')));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }
}
