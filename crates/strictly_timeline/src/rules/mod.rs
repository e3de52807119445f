//! Game rules for tic-tac-toe.
//!
//! Pure functions over cell arrays. Rules are kept apart from history
//! storage so the view and the invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Win, detect};
