//! Advisory error taxonomy.

use thiserror::Error;

/// Errors surfaced by the advisory core.
///
/// None of these cross the controller's public boundary as panics or
/// returned failures; they are reported through the error-notification
/// channel (or, for document sources, logged) and recovered locally.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// An event was absent or failed its category validity contract.
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// A document source could not be read; lookups degrade to empty.
    #[error("document source unavailable: {path}: {reason}")]
    DocumentUnavailable {
        /// The path that could not be read.
        path: String,
        /// The underlying read failure.
        reason: String,
    },

    /// A process step exceeded the configured bound.
    #[error("processing took {elapsed_ms} ms, exceeding the {bound_ms} ms bound")]
    Timeout {
        /// Milliseconds the step actually took.
        elapsed_ms: i64,
        /// The configured bound in milliseconds.
        bound_ms: i64,
    },

    /// Event encoding or decoding failed.
    #[error("event serialization failed: {0}")]
    Serialization(String),
}
