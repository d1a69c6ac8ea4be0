//! Time source for the controller's deadlines.
//!
//! The controller never calls `Instant::now()` directly; it asks its clock.
//! Tests drive a [`ManualClock`] forward instead of sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub trait Clock {
    /// Monotonic time used for timer deadlines
    fn now(&self) -> Instant;

    /// Wall-clock milliseconds since the Unix epoch, used to mint item ids
    fn epoch_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start: Instant,
    offset: Rc<Cell<Duration>>,
    epoch_start_ms: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at_millis(1_700_000_000_000)
    }

    pub fn starting_at_millis(epoch_start_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
            epoch_start_ms,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }

    fn epoch_millis(&self) -> u64 {
        self.epoch_start_ms + self.offset.get().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = clock.now();

        other.advance(Duration::from_millis(1500));

        assert_eq!(clock.now() - before, Duration::from_millis(1500));
        assert_eq!(clock.epoch_millis(), 1_700_000_001_500);
    }

    #[test]
    fn test_system_clock_epoch_is_recent() {
        // 2020-01-01 in millis
        assert!(SystemClock.epoch_millis() > 1_577_836_800_000);
    }
}
