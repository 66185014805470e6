//! Controller timing configuration.

use std::time::Duration;

/// Timing knobs of the advisory controller.
///
/// The three durations are independent; none scales with another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Soft watchdog bound on one compose step. Exceeding it is reported
    /// and counted as an error but does not cancel the step.
    pub event_timeout: Duration,
    /// How long a displayed advisory waits for a collaborator
    /// acknowledgement before the controller advances on its own.
    pub ack_delay: Duration,
    /// How long an error-state excursion lasts before the unconditional
    /// recovery back to idle.
    pub recovery_delay: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            event_timeout: Duration::from_secs(5),
            ack_delay: Duration::from_millis(1500),
            recovery_delay: Duration::from_secs(2),
        }
    }
}
