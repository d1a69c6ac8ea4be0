//! Application-wide constants
//!
//! Centralized location for store keys, timing defaults and display strings
//! that are used across multiple modules.

use std::time::Duration;

// Store keys
/// Key holding the ordered array of active `{id, text}` records
pub const TODOS_KEY: &str = "todos";
/// Key holding the `{animatedDeletionEnabled}` settings record
pub const SETTINGS_KEY: &str = "settings";

// Countdown defaults
/// Number of one-second steps before a completed item is removed
pub const DEFAULT_COUNTDOWN_STEPS: u32 = 3;
/// Step count used by the fast configuration
pub const FAST_COUNTDOWN_STEPS: u32 = 2;
/// Length of one countdown step
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

// Ephemeral hint windows
pub const COPIED_HINT_DURATION: Duration = Duration::from_secs(2);
pub const NEW_ITEM_HINT_DURATION: Duration = Duration::from_secs(3);

/// Directory name used under the platform data dir
pub const APP_DIR_NAME: &str = "prompt-queue";

/// Fallback data directory when the platform has no data dir
pub const FALLBACK_DATA_DIR: &str = "prompt_queue_data";
