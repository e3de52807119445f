//! Read-only view of a game, shaped for a renderer.
//!
//! A renderer builds a [`GameView`] each frame, draws it, and turns user
//! input into [`Command`]s. It never needs to decide whether a click is legal.

use serde::Serialize;
use tracing::instrument;

use crate::action::Command;
use crate::game::GameState;
use crate::layout::cell_index;
use crate::types::{Cell, Mark};

/// Status line, in priority order winner > draw > next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// One cell as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Linear index.
    pub index: usize,
    /// Board row.
    pub row: usize,
    /// Board column.
    pub column: usize,
    /// Contents.
    pub cell: Cell,
    /// Placed by the displayed move.
    pub emphasized: bool,
    /// On the winning line.
    pub highlighted: bool,
}

impl CellView {
    /// Command a click on this cell produces.
    pub fn click(&self) -> Command {
        Command::Click {
            index: self.index,
            row: self.row,
            column: self.column,
        }
    }
}

/// One selectable history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// This step is the one displayed.
    pub is_current: bool,
}

impl MoveEntry {
    /// Command selecting this entry produces.
    pub fn select(&self) -> Command {
        Command::JumpTo { step: self.step }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Cells grouped by row, in display order.
    pub rows: Vec<Vec<CellView>>,
    /// Status line.
    pub status: Status,
    /// One entry per history snapshot, oldest first.
    pub moves: Vec<MoveEntry>,
    /// Caption for the sort toggle.
    pub sort_label: &'static str,
}

impl GameView {
    /// Builds the view of the displayed step.
    ///
    /// When sorting is ascending both the row order and the cell order
    /// within each row are reversed, so the last cell comes first.
    #[instrument(level = "trace", skip(game), fields(step = game.current_step()))]
    pub fn from_state(game: &GameState) -> Self {
        let snapshot = game.current();
        let win = game.winner();

        let mut rows: Vec<Vec<CellView>> = (0..game.height())
            .map(|row| {
                let mut cells: Vec<CellView> = (0..game.width())
                    .map(|column| {
                        let index = cell_index(row, column);
                        CellView {
                            index,
                            row,
                            column,
                            cell: snapshot.get(index).unwrap_or_default(),
                            emphasized: snapshot.is_emphasized(index),
                            highlighted: win.is_some_and(|w| w.contains(index)),
                        }
                    })
                    .collect();
                if game.sort_ascending() {
                    cells.reverse();
                }
                cells
            })
            .collect();
        if game.sort_ascending() {
            rows.reverse();
        }

        let status = match win {
            Some(w) => Status::Winner(w.mark),
            None if game.is_draw() => Status::Draw,
            None => Status::NextPlayer(game.next_player()),
        };

        let moves = game
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                label: move_label(step, snapshot.location().map(|l| (l.row, l.column))),
                is_current: step == game.current_step(),
            })
            .collect();

        Self {
            rows,
            status,
            moves,
            sort_label: if game.sort_ascending() { "asc" } else { "desc" },
        }
    }

    /// Cell at a display position, accounting for sort order.
    pub fn cell_at(&self, display_row: usize, display_column: usize) -> Option<&CellView> {
        self.rows.get(display_row)?.get(display_column)
    }
}

/// History button label for a step.
pub fn move_label(step: usize, location: Option<(usize, usize)>) -> String {
    match (step, location) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (n, Some((row, column))) => format!("Go to move #{} (x: {} y: {})", n, row, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut GameState, indices: &[usize]) {
        for &index in indices {
            game.apply_move(index, index / 3, index % 3);
        }
    }

    fn indices(view: &GameView) -> Vec<Vec<usize>> {
        view.rows
            .iter()
            .map(|row| row.iter().map(|c| c.index).collect())
            .collect()
    }

    #[test]
    fn test_ascending_reverses_rows_and_columns() {
        let view = GameView::from_state(&GameState::new());
        assert_eq!(indices(&view), vec![vec![8, 7, 6], vec![5, 4, 3], vec![2, 1, 0]]);
        assert_eq!(view.sort_label, "asc");
        assert_eq!(view.cell_at(0, 0).map(|c| (c.row, c.column)), Some((2, 2)));
    }

    #[test]
    fn test_descending_rows_in_natural_order() {
        let mut game = GameState::new();
        game.toggle_sort_order();
        let view = GameView::from_state(&game);
        assert_eq!(indices(&view), vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
        assert_eq!(view.sort_label, "desc");
        assert_eq!(view.cell_at(0, 0).map(|c| (c.row, c.column)), Some((0, 0)));
    }

    #[test]
    fn test_status_next_player() {
        let mut game = GameState::new();
        play(&mut game, &[4]);
        let view = GameView::from_state(&game);
        assert_eq!(view.status, Status::NextPlayer(Mark::O));
        assert_eq!(view.status.to_string(), "Next player: O");
    }

    #[test]
    fn test_status_winner_and_highlight() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let view = GameView::from_state(&game);

        assert_eq!(view.status.to_string(), "Winner: X");
        let highlighted: Vec<usize> = view
            .rows
            .iter()
            .flatten()
            .filter(|c| c.highlighted)
            .map(|c| c.index)
            .collect();
        assert_eq!(highlighted, vec![0, 1, 2]);
    }

    #[test]
    fn test_status_draw() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let view = GameView::from_state(&game);
        assert_eq!(view.status, Status::Draw);
        assert_eq!(view.status.to_string(), "Draw");
    }

    #[test]
    fn test_emphasis_follows_displayed_step() {
        let mut game = GameState::new();
        play(&mut game, &[4, 0]);
        game.jump_to(1).unwrap();
        let view = GameView::from_state(&game);

        let emphasized: Vec<usize> = view
            .rows
            .iter()
            .flatten()
            .filter(|c| c.emphasized)
            .map(|c| c.index)
            .collect();
        assert_eq!(emphasized, vec![4]);
    }

    #[test]
    fn test_move_labels() {
        let mut game = GameState::new();
        game.apply_move(cell_index(1, 2), 1, 2);
        let view = GameView::from_state(&game);

        let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1 (x: 1 y: 2)"]);
        assert!(view.moves[1].is_current);
        assert_eq!(view.moves[0].select(), Command::JumpTo { step: 0 });
    }

    #[test]
    fn test_cell_click_command() {
        let view = GameView::from_state(&GameState::new());
        let cell = view.cell_at(2, 1).unwrap();
        assert_eq!(
            cell.click(),
            Command::Click {
                index: 1,
                row: 0,
                column: 1
            }
        );
    }
}
