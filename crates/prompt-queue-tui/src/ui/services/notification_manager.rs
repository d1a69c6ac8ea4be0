use prompt_queue_core::{ControllerEvent, StoreError};

use crate::ui::notifications::{Notification, NotificationQueue};

/// Turns controller events into status-bar toasts and owns the toast queue.
pub struct NotificationManager {
    notifications: NotificationQueue,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: NotificationQueue::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Queue the toast (if any) that an event deserves
    pub fn on_controller_event(&mut self, event: &ControllerEvent) {
        if let Some(notification) = notification_for(event) {
            self.notify(notification);
        }
    }

    /// Poll and update notification timers (call each tick)
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    pub fn dismiss(&mut self) {
        self.notifications.dismiss();
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.current()
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

fn notification_for(event: &ControllerEvent) -> Option<Notification> {
    match event {
        ControllerEvent::CopyFailed { reason, .. } => Some(Notification::warning(reason.clone())),
        ControllerEvent::PersistFailed(e) => Some(Notification::error(e.to_string())),
        ControllerEvent::RecoveredFromCorruptData(e) => Some(Notification::warning(match e {
            StoreError::Parse { key, .. } => format!("Stored {} were unreadable and were reset", key),
            other => other.to_string(),
        })),
        ControllerEvent::CompletionCancelled { .. } => Some(Notification::info("Deletion cancelled")),
        ControllerEvent::SettingsChanged(settings) => Some(Notification::info(
            if settings.animated_deletion_enabled {
                "Animated deletion on"
            } else {
                "Animated deletion off"
            },
        )),
        // Shown inline in the list instead
        ControllerEvent::ItemAdded { .. }
        | ControllerEvent::ItemCopied { .. }
        | ControllerEvent::CountdownStarted { .. }
        | ControllerEvent::CountdownTicked { .. }
        | ControllerEvent::ItemRemoved { .. }
        | ControllerEvent::HintExpired(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::NotificationLevel;
    use prompt_queue_core::{ItemId, Settings};

    #[test]
    fn test_new_manager_is_empty() {
        let manager = NotificationManager::new();
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_copy_failure_becomes_warning() {
        let mut manager = NotificationManager::new();
        manager.on_controller_event(&ControllerEvent::CopyFailed {
            id: ItemId::new("1"),
            reason: "Clipboard unavailable: no display".into(),
        });

        let current = manager.current().unwrap();
        assert_eq!(current.level, NotificationLevel::Warning);
        assert_eq!(current.message, "Clipboard unavailable: no display");
    }

    #[test]
    fn test_persist_failure_becomes_error() {
        let mut manager = NotificationManager::new();
        manager.on_controller_event(&ControllerEvent::PersistFailed(StoreError::write(
            "todos",
            "disk full",
        )));

        let current = manager.current().unwrap();
        assert_eq!(current.level, NotificationLevel::Error);
        assert_eq!(current.message, "Failed to save 'todos': disk full");
    }

    #[test]
    fn test_recovered_parse_error_message() {
        let mut manager = NotificationManager::new();
        manager.on_controller_event(&ControllerEvent::RecoveredFromCorruptData(
            StoreError::parse("todos", "expected value"),
        ));
        assert_eq!(
            manager.current().unwrap().message,
            "Stored todos were unreadable and were reset"
        );
    }

    #[test]
    fn test_settings_toggle_message() {
        let mut manager = NotificationManager::new();
        manager.on_controller_event(&ControllerEvent::SettingsChanged(Settings {
            animated_deletion_enabled: false,
        }));
        assert_eq!(manager.current().unwrap().message, "Animated deletion off");
    }

    #[test]
    fn test_routine_events_are_silent() {
        let mut manager = NotificationManager::new();
        manager.on_controller_event(&ControllerEvent::ItemAdded { id: ItemId::new("1") });
        manager.on_controller_event(&ControllerEvent::CountdownTicked {
            id: ItemId::new("1"),
            remaining: 2,
        });
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut manager = NotificationManager::new();
        manager.notify(Notification::info("test"));
        manager.dismiss();
        assert!(manager.current().is_none());
    }
}
