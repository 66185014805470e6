//! Console observer printing controller notifications.

use lorekeeper_core::observe::AdvisoryObserver;
use lorekeeper_core::state::AdvisorState;

/// Prints advisory text and errors to the console; lifecycle noise goes to
/// the tracing log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl AdvisoryObserver for ConsoleObserver {
    fn on_ready_to_display(&self, text: &str) {
        println!("» {text}");
    }

    fn on_state_changed(&self, old: AdvisorState, new: AdvisorState) {
        tracing::debug!(%old, %new, "advisor state");
    }

    fn on_error_occurred(&self, message: &str) {
        eprintln!("! {message}");
    }

    fn on_processing_complete(&self) {
        tracing::info!("advisory queue drained");
    }
}
