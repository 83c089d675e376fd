//! Game error types.

use derive_more::{Display, Error};

/// Error returned by fallible [`GameController`](crate::GameController) calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A history step past the end of the recorded history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of recorded entries.
        len: usize,
    },
    /// Saved game state that no sequence of moves could have produced.
    #[display("Invalid game state at step {step}: {reason}")]
    InvalidState {
        /// History step where the state breaks.
        step: usize,
        /// What is wrong with it.
        reason: &'static str,
    },
}
