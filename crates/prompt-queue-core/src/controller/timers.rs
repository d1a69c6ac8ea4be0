//! Deadline table for the controller's timers.
//!
//! Timers are plain deadlines keyed by what they are for. Nothing fires on its
//! own: the owner polls [`Timers::pop_due`] from its tick. Cancelling a timer
//! removes its entry, so a cancelled timer can never fire afterwards.

use std::collections::HashMap;
use std::time::Instant;

use crate::models::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Repeating one-step countdown for an item pending deletion
    Countdown(ItemId),
    CopiedHint,
    NewlyAddedHint,
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    /// Scheduling order, breaks ties between equal deadlines
    seq: u64,
}

#[derive(Debug, Default)]
pub struct Timers {
    deadlines: HashMap<TimerKey, Deadline>,
    next_seq: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` at `at`, replacing any existing deadline for it
    pub fn schedule(&mut self, key: TimerKey, at: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.deadlines.insert(key, Deadline { at, seq });
    }

    /// Returns true if a deadline was removed
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.deadlines.remove(key).is_some()
    }

    pub fn is_scheduled(&self, key: &TimerKey) -> bool {
        self.deadlines.contains_key(key)
    }

    pub fn deadline(&self, key: &TimerKey) -> Option<Instant> {
        self.deadlines.get(key).map(|d| d.at)
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().map(|d| d.at).min()
    }

    /// Remove and return the earliest timer due at `now`, with its deadline
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerKey, Instant)> {
        let key = self
            .deadlines
            .iter()
            .filter(|(_, d)| d.at <= now)
            .min_by_key(|(_, d)| (d.at, d.seq))
            .map(|(key, _)| key.clone())?;
        let deadline = self.deadlines.remove(&key)?;
        Some((key, deadline.at))
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pop_due_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::CopiedHint, start + Duration::from_secs(2));
        timers.schedule(TimerKey::NewlyAddedHint, start + Duration::from_secs(1));

        let now = start + Duration::from_secs(5);
        assert_eq!(timers.pop_due(now).map(|(k, _)| k), Some(TimerKey::NewlyAddedHint));
        assert_eq!(timers.pop_due(now).map(|(k, _)| k), Some(TimerKey::CopiedHint));
        assert_eq!(timers.pop_due(now), None);
    }

    #[test]
    fn test_not_due_yet() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::CopiedHint, start + Duration::from_secs(2));

        assert_eq!(timers.pop_due(start + Duration::from_secs(1)), None);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let at = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::Countdown(ItemId::new("b")), at);
        timers.schedule(TimerKey::Countdown(ItemId::new("a")), at);

        assert_eq!(
            timers.pop_due(at).map(|(k, _)| k),
            Some(TimerKey::Countdown(ItemId::new("b")))
        );
    }

    #[test]
    fn test_reschedule_replaces() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(TimerKey::NewlyAddedHint, start + Duration::from_secs(1));
        timers.schedule(TimerKey::NewlyAddedHint, start + Duration::from_secs(3));

        assert_eq!(timers.len(), 1);
        assert_eq!(timers.pop_due(start + Duration::from_secs(2)), None);
        assert_eq!(
            timers.deadline(&TimerKey::NewlyAddedHint),
            Some(start + Duration::from_secs(3))
        );
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timers = Timers::new();
        let key = TimerKey::Countdown(ItemId::new("1"));
        timers.schedule(key.clone(), start);

        assert!(timers.cancel(&key));
        assert!(!timers.cancel(&key));
        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(start + Duration::from_secs(10)), None);
    }
}
