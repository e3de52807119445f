//! Game state with a linear, time-travelling move history.

use tracing::{debug, instrument, trace};

use crate::action::{Command, IgnoreReason, MoveOutcome};
use crate::config::{BoardConfig, ConfigError};
use crate::error::TimelineError;
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::layout::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::rules::{self, Win};
use crate::types::{Location, Mark, Snapshot};

/// Tic-tac-toe game with move history.
///
/// History always starts with the empty board. `current_step` selects which
/// snapshot is displayed; moving from an earlier step discards the snapshots
/// after it. Whose turn it is follows from the step parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_step: usize,
    sort_ascending: bool,
    width: usize,
    height: usize,
}

impl GameState {
    /// Creates a 3x3 game at the start position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::empty()],
            current_step: 0,
            sort_ascending: true,
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }

    /// Creates a game from a board configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the dimensions are not 3x3.
    #[instrument(skip(config), fields(width = config.width(), height = config.height()))]
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sort_ascending: *config.sort_ascending(),
            width: *config.width(),
            height: *config.height(),
            ..Self::new()
        })
    }

    /// Every snapshot from game start to the latest move kept.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Ascending order renders rows and columns reversed; descending keeps
    /// them in natural order.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Board width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Mark of the player to move at the displayed step.
    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// True when X is to move.
    pub fn x_is_next(&self) -> bool {
        self.current_step % 2 == 0
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::detect(self.current().cells())
    }

    /// Board is full after `width * height` moves and nobody won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(
            self.current().cells(),
            self.current_step,
            self.width,
            self.height,
        )
    }

    /// Won or drawn at the displayed step.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Places the next mark at `index`.
    ///
    /// Ignored when the displayed board is already won, the cell is taken,
    /// or the index is off the board. Otherwise snapshots after the
    /// displayed step are dropped and the new one becomes current.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize, row: usize, column: usize) -> MoveOutcome {
        let current = self.current();

        if self.winner().is_some() {
            trace!("Click ignored, game already won");
            return MoveOutcome::Ignored(IgnoreReason::GameWon);
        }

        match current.get(index) {
            None => {
                trace!("Click ignored, index off the board");
                return MoveOutcome::Ignored(IgnoreReason::OutOfRange(index));
            }
            Some(cell) if !cell.is_empty() => {
                trace!("Click ignored, cell occupied");
                return MoveOutcome::Ignored(IgnoreReason::Occupied(index));
            }
            Some(_) => {}
        }

        let mark = self.next_player();
        let next = current.with_move(index, mark, Location::new(row, column));

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        debug!(%mark, discarded, new_step = self.current_step, "Move placed");
        self.debug_check();
        MoveOutcome::Placed(mark)
    }

    /// Displays the snapshot at `step` without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::StepOutOfRange`] and leaves the state
    /// unchanged if `step` is not a history index.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), TimelineError> {
        if step >= self.history.len() {
            debug!(len = self.history.len(), "Jump rejected");
            return Err(TimelineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.current_step = step;
        debug!("Jumped");
        self.debug_check();
        Ok(())
    }

    /// Flips between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        debug!(ascending = self.sort_ascending, "Sort order toggled");
    }

    /// Applies a command from the renderer.
    ///
    /// Clicks report whether they changed anything; jumps propagate range
    /// errors.
    #[instrument(skip(self, command), fields(command = %command))]
    pub fn dispatch(&mut self, command: Command) -> Result<Option<MoveOutcome>, TimelineError> {
        match command {
            Command::Click { index, row, column } => Ok(Some(self.apply_move(index, row, column))),
            Command::JumpTo { step } => self.jump_to(step).map(|()| None),
            Command::ToggleSort => {
                self.toggle_sort_order();
                Ok(None)
            }
        }
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimelineInvariants::check_all(self)
        {
            panic!("Game invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
