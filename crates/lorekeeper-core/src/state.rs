//! Processing states of the advisory controller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of the controller's single-worker state machine.
///
/// The machine is long-lived: there is no terminal state, and every
/// excursion into [`AdvisorState::Error`] recovers back to
/// [`AdvisorState::Idle`] on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorState {
    /// Nothing in flight; the queue is empty.
    Idle,
    /// An event has been dequeued for processing.
    Listening,
    /// Advisory text is being composed for the dequeued event.
    Composing,
    /// Text was emitted; waiting for a collaborator (or the auto-advance
    /// delay) to acknowledge it.
    WaitingForAck,
    /// A recoverable error occurred; recovery back to idle is scheduled.
    Error,
}

impl AdvisorState {
    /// Returns the snake_case wire label for this state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
            Self::Composing => "composing",
            Self::WaitingForAck => "waiting_for_ack",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AdvisorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
