// Toast queue for status feedback in the status bar
// Supports priorities, auto-dismiss and short-window deduplication of problems

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Warning => "⚠",
            NotificationLevel::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    fn with_level(message: impl Into<String>, level: NotificationLevel, secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration: Duration::from_secs(secs),
            shown_at: None,
        }
    }

    /// Info notification (3 seconds)
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Info, 3)
    }

    /// Warning notification (4 seconds)
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Warning, 4)
    }

    /// Error notification (5 seconds)
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, NotificationLevel::Error, 5)
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    pub fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Pending notifications (front = next to show)
    queue: VecDeque<Notification>,
    current: Option<Notification>,
    /// Recently pushed messages (hash, expiry) for deduplication
    recent_messages: Vec<(u64, Instant)>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification. A higher-priority one replaces the current toast,
    /// which is dropped rather than re-queued.
    ///
    /// Repeated warnings and errors within 2 seconds are dropped. Info toasts
    /// confirm user actions, so a repeat restarts the visible toast instead.
    pub fn push(&mut self, notification: Notification) {
        if notification.level >= NotificationLevel::Warning {
            let hash = Self::hash_message(&notification.message);
            let now = Instant::now();

            self.recent_messages.retain(|(_, expiry)| *expiry > now);
            if self.recent_messages.iter().any(|(h, _)| *h == hash) {
                return;
            }
            self.recent_messages.push((hash, now + Duration::from_secs(2)));
        }

        let repeats_current = self.current.as_ref().is_some_and(|current| {
            current.level == notification.level && current.message == notification.message
        });
        if repeats_current {
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
            return;
        }

        if let Some(ref current) = self.current {
            if notification.level > current.level {
                let mut n = notification;
                n.mark_shown();
                self.current = Some(n);
                return;
            }
        }

        if self.current.is_none() {
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
        } else {
            let pos = self
                .queue
                .iter()
                .position(|n| n.level < notification.level)
                .unwrap_or(self.queue.len());
            self.queue.insert(pos, notification);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance();
    }

    /// Advance to the next notification once the current one expired
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown();
                self.current = Some(next);
            }
        }
    }

    fn hash_message(message: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        message.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("test");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.duration, Duration::from_secs(3));
        assert!(n.shown_at.is_none());

        let n = Notification::error("error");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_queue_basic() {
        let mut q = NotificationQueue::new();
        assert!(q.current().is_none());

        q.push(Notification::info("first"));
        assert_eq!(q.current().unwrap().message, "first");

        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_priority_replaces_current() {
        let mut q = NotificationQueue::new();

        q.push(Notification::info("low priority"));
        q.push(Notification::error("high priority"));
        assert_eq!(q.current().unwrap().message, "high priority");

        // The replaced toast is dropped, not re-queued
        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_lower_priority_waits_in_queue() {
        let mut q = NotificationQueue::new();

        q.push(Notification::warning("first"));
        q.push(Notification::info("second"));
        assert_eq!(q.current().unwrap().message, "first");

        q.dismiss();
        assert_eq!(q.current().unwrap().message, "second");
    }

    #[test]
    fn test_duplicate_warning_suppressed() {
        let mut q = NotificationQueue::new();
        q.push(Notification::warning("same"));
        q.dismiss();
        q.push(Notification::warning("same"));
        assert!(q.current().is_none());
    }

    #[test]
    fn test_repeated_info_shown_again_after_dismiss() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("Deletion cancelled"));
        q.dismiss();
        q.push(Notification::info("Deletion cancelled"));
        assert_eq!(q.current().unwrap().message, "Deletion cancelled");
    }

    #[test]
    fn test_repeated_info_restarts_current_without_queueing() {
        let mut q = NotificationQueue::new();
        q.push(Notification::info("Animated deletion off"));
        q.push(Notification::info("Animated deletion off"));
        assert_eq!(q.current().unwrap().message, "Animated deletion off");

        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_expired_advances_on_tick() {
        let mut q = NotificationQueue::new();
        let mut short = Notification::warning("short");
        short.duration = Duration::ZERO;
        q.push(short);
        q.push(Notification::info("next"));

        q.tick();
        assert_eq!(q.current().unwrap().message, "next");
    }

    #[test]
    fn test_level_ordering() {
        assert!(NotificationLevel::Error > NotificationLevel::Warning);
        assert!(NotificationLevel::Warning > NotificationLevel::Info);
    }
}
