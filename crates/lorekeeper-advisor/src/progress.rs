//! Progress counters maintained by the controller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lorekeeper_core::event::EventCategory;

/// Counters describing what the controller has advised so far.
///
/// Mutated only by the controller's worker: once per successfully displayed
/// event, or once per error. [`crate::controller::AdvisoryController::progress`]
/// hands out clones as read-only snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressState {
    /// Events that completed a full process step.
    pub events_processed: u64,
    /// Errors reported through the error-notification channel.
    pub errors_count: u64,
    /// Category of the most recently processed event.
    pub last_event_category: Option<EventCategory>,
    /// When the most recent event finished composing.
    pub last_event_time: Option<DateTime<Utc>>,
    /// Display requests emitted so far.
    pub total_display_count: u64,
}

impl ProgressState {
    pub(crate) fn record_display(&mut self, category: EventCategory, at: DateTime<Utc>) {
        self.events_processed += 1;
        self.total_display_count += 1;
        self.last_event_category = Some(category);
        self.last_event_time = Some(at);
    }

    pub(crate) fn record_error(&mut self) {
        self.errors_count += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
