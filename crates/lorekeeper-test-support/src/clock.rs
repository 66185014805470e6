//! Test clocks — deterministic `Clock` implementations.

use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};

use lorekeeper_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by a fixed step on every `now()` call.
///
/// The first call returns the start time; each further call returns one
/// more step. A step larger than the controller's timeout bound makes the
/// soft watchdog fire deterministically.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: TimeDelta,
    calls: Mutex<i32>,
}

impl SteppingClock {
    /// Creates a clock starting at `start`, advancing by `step` per call.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            start,
            step,
            calls: Mutex::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut calls = self.calls.lock().unwrap();
        let now = self.start + self.step * *calls;
        *calls += 1;
        now
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use lorekeeper_core::clock::Clock;

    use super::SteppingClock;

    #[test]
    fn test_stepping_clock_advances_per_call() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let clock = SteppingClock::new(start, TimeDelta::seconds(10));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + TimeDelta::seconds(10));
        assert_eq!(clock.now(), start + TimeDelta::seconds(20));
    }
}
