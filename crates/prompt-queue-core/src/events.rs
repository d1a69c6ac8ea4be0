use crate::models::{ItemId, Settings};
use crate::store::StoreError;

/// Which ephemeral marker expired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    Copied,
    NewlyAdded,
}

/// Observable changes, queued by the controller and drained by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    ItemAdded { id: ItemId },
    ItemCopied { id: ItemId },
    CopyFailed { id: ItemId, reason: String },
    CountdownStarted { id: ItemId, remaining: u32 },
    CountdownTicked { id: ItemId, remaining: u32 },
    CompletionCancelled { id: ItemId },
    ItemRemoved { id: ItemId },
    SettingsChanged(Settings),
    HintExpired(HintKind),
    /// Stored data was unreadable at startup and replaced by defaults
    RecoveredFromCorruptData(StoreError),
    PersistFailed(StoreError),
}
