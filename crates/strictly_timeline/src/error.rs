//! Error types for game transitions.

use derive_more::{Display, Error};

/// Errors raised by [`GameState`](crate::GameState) transitions.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TimelineError {
    /// Requested a history step that does not exist.
    #[display("step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
