//! Timed-suspension abstraction for the controller's cooperative delays.

use std::time::Duration;

use async_trait::async_trait;

/// Abstraction over timed suspension.
///
/// The controller's auto-acknowledge delay and error-recovery delay both
/// suspend through this trait, injected at construction, so tests run on a
/// virtual clock instead of wall-clock waits.
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Suspends the calling task for `duration`.
    async fn sleep(&self, duration: Duration);
}
