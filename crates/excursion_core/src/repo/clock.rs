//! Time source used to stamp record lifecycle timestamps.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic timestamp tests.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Moves the clock by `delta`. Negative deltas move it backwards.
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock();
        *current += delta;
    }

    pub fn set(&self, value: DateTime<Utc>) {
        *self.current.lock() = value;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn manual_clock_advances_and_rewinds() {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(start);

        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now(), start + Duration::seconds(30));

        clock.advance(Duration::seconds(-60));
        assert_eq!(clock.now(), start - Duration::seconds(30));

        clock.set(start);
        assert_eq!(clock.now(), start);
    }
}
