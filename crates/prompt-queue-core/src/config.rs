use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    APP_DIR_NAME, COPIED_HINT_DURATION, COUNTDOWN_TICK, DEFAULT_COUNTDOWN_STEPS,
    FALLBACK_DATA_DIR, FAST_COUNTDOWN_STEPS, NEW_ITEM_HINT_DURATION,
};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    /// Steps shown before a completed item disappears (never below 1)
    pub countdown_steps: u32,
    /// Length of one countdown step
    pub tick_interval: Duration,
    pub copied_hint_duration: Duration,
    pub new_item_hint_duration: Duration,
    /// Whether a running countdown may be cancelled
    pub allow_cancel: bool,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            countdown_steps: DEFAULT_COUNTDOWN_STEPS,
            tick_interval: COUNTDOWN_TICK,
            copied_hint_duration: COPIED_HINT_DURATION,
            new_item_hint_duration: NEW_ITEM_HINT_DURATION,
            allow_cancel: true,
        }
    }

    /// Config with the shorter two-step countdown
    pub fn fast<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::new(data_dir).with_countdown_steps(FAST_COUNTDOWN_STEPS)
    }

    pub fn with_countdown_steps(mut self, steps: u32) -> Self {
        self.countdown_steps = steps.max(1);
        self
    }

    pub fn with_allow_cancel(mut self, allow_cancel: bool) -> Self {
        self.allow_cancel = allow_cancel;
        self
    }

    /// Platform data directory for the app, e.g. `~/.local/share/prompt-queue`
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}
