//! Test observer — records every controller notification.

use std::sync::Mutex;

use lorekeeper_core::observe::AdvisoryObserver;
use lorekeeper_core::state::AdvisorState;

/// One recorded controller notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `on_ready_to_display` with the advisory text.
    Ready(String),
    /// `on_state_changed` with the old and new state.
    StateChanged(AdvisorState, AdvisorState),
    /// `on_error_occurred` with the message.
    Error(String),
    /// `on_processing_complete`.
    Complete,
}

/// An observer that records every notification in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingObserver {
    /// Creates an observer with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all notifications, in arrival order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    /// Returns the advisory texts from ready-to-display notifications, in
    /// arrival order.
    #[must_use]
    pub fn ready_texts(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Ready(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded state transitions, in arrival order.
    #[must_use]
    pub fn state_changes(&self) -> Vec<(AdvisorState, AdvisorState)> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::StateChanged(old, new) => Some((old, new)),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded error messages, in arrival order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

impl AdvisoryObserver for RecordingObserver {
    fn on_ready_to_display(&self, text: &str) {
        self.record(Notification::Ready(text.to_owned()));
    }

    fn on_state_changed(&self, old: AdvisorState, new: AdvisorState) {
        self.record(Notification::StateChanged(old, new));
    }

    fn on_error_occurred(&self, message: &str) {
        self.record(Notification::Error(message.to_owned()));
    }

    fn on_processing_complete(&self) {
        self.record(Notification::Complete);
    }
}
