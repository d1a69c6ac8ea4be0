pub mod animation_clock;
pub mod notification_manager;

pub use animation_clock::AnimationClock;
pub use notification_manager::NotificationManager;
