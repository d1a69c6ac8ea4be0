pub mod adapter;
pub mod file_store;
pub mod kv;

pub use adapter::{parse_items, parse_settings, StoreAdapter, StoredEntry};
pub use file_store::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore, StoreError};
