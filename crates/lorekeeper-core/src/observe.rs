//! Outbound notification contract from the controller to collaborators.

use crate::state::AdvisorState;

/// Callbacks fired by the advisory controller.
///
/// Collaborators (typically the UI layer) register an implementation when
/// the controller is spawned. All methods default to no-ops so an
/// implementation subscribes only to what it needs. Callbacks run on the
/// controller's worker task and must not block.
pub trait AdvisoryObserver: Send + Sync {
    /// Advisory text for the current event is ready to show.
    fn on_ready_to_display(&self, _text: &str) {}

    /// The controller's state machine moved from `_old` to `_new`.
    fn on_state_changed(&self, _old: AdvisorState, _new: AdvisorState) {}

    /// A recoverable error occurred; `_message` is human-readable and meant
    /// to be surfaced as a non-blocking warning.
    fn on_error_occurred(&self, _message: &str) {}

    /// The pending queue drained and the controller returned to idle.
    fn on_processing_complete(&self) {}
}
