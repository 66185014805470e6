//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Abstraction over system time. Event timestamps and the controller's soft
/// watchdog both read through this trait so tests can substitute a
/// deterministic source.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
