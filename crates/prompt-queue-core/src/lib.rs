pub mod clipboard;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod events;
pub mod models;
pub mod store;

// Re-export the controller surface at crate root for convenience
pub use clipboard::{ClipboardError, ClipboardWriter};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CoreConfig;
pub use controller::{LifecycleController, Snapshot};
pub use events::{ControllerEvent, HintKind};
pub use models::{Item, ItemId, LifecycleState, PersistedItem, Settings};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
