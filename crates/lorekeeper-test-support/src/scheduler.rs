//! Test schedulers — deterministic `Scheduler` implementations.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use lorekeeper_core::scheduler::Scheduler;

/// A scheduler whose sleeps complete immediately. Lets a full
/// submit-compose-acknowledge cycle run without wall-clock waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScheduler;

#[async_trait]
impl Scheduler for NoopScheduler {
    async fn sleep(&self, _duration: Duration) {}
}

/// A scheduler whose sleeps never complete. Parks the controller in
/// whatever delay it enters next — useful for observing the queue while an
/// event waits for acknowledgement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingScheduler;

#[async_trait]
impl Scheduler for PendingScheduler {
    async fn sleep(&self, _duration: Duration) {
        std::future::pending::<()>().await;
    }
}

/// A scheduler that records every requested sleep and completes it
/// immediately.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingScheduler {
    /// Creates a recording scheduler with no sleeps recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all requested sleep durations, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait]
impl Scheduler for RecordingScheduler {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
