//! Tokio-backed scheduler.

use std::time::Duration;

use async_trait::async_trait;

use lorekeeper_core::scheduler::Scheduler;

/// Production scheduler that suspends on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
