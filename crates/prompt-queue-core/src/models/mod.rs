pub mod item;
pub mod settings;

pub use item::{count_label, Item, ItemId, LifecycleState, PersistedItem};
pub use settings::Settings;
