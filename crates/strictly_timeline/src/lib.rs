//! Strictly Timeline - tic-tac-toe with time travel.
//!
//! Pure game logic: a 3x3 board, win and draw detection, and a linear move
//! history that can be rewound to any earlier step. Playing a move from an
//! earlier step discards the moves that followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a cell array
//! - **GameState**: history, displayed step, sort order; one transition per
//!   [`Command`]
//! - **View**: [`GameView`], the read-only data a renderer draws
//! - **Invariants**: structural checks run after every transition in debug
//!   builds
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{Command, GameState, GameView, Mark, Status};
//!
//! let mut game = GameState::new();
//! game.dispatch(Command::Click { index: 4, row: 1, column: 1 }).unwrap();
//!
//! let view = GameView::from_state(&game);
//! assert_eq!(view.status, Status::NextPlayer(Mark::O));
//! assert_eq!(view.moves[1].label, "Go to move #1 (x: 1 y: 1)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod game;
pub mod invariants;
pub mod layout;
pub mod rules;
mod types;
mod view;

pub use action::{Command, IgnoreReason, MoveOutcome};
pub use config::{BoardConfig, ConfigError};
pub use error::TimelineError;
pub use game::GameState;
pub use rules::{Win, detect};
pub use types::{Cell, Location, Mark, Snapshot};
pub use view::{CellView, GameView, MoveEntry, Status, move_label};
