//! Typed access to the two store keys.
//!
//! Loading never fails outright: a missing key yields the empty/default value,
//! and unreadable or malformed data is logged and replaced by the
//! empty/default value, with the error handed back for the UI to mention.

use serde_json::Value;

use super::kv::{KeyValueStore, StoreError};
use crate::constants::{SETTINGS_KEY, TODOS_KEY};
use crate::models::{ItemId, PersistedItem, Settings};

/// An item record recovered from the store.
///
/// `id` is `None` when the stored record had no usable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub id: Option<ItemId>,
    pub text: String,
}

pub struct StoreAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StoreAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load stored items, returning (entries, optional_error)
    pub fn load_items(&self) -> (Vec<StoredEntry>, Option<StoreError>) {
        let raw = match self.store.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Vec::new(), None),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored items, starting empty");
                return (Vec::new(), Some(e));
            }
        };

        match parse_items(&raw) {
            Ok(entries) => (entries, None),
            Err(message) => {
                let error = StoreError::parse(TODOS_KEY, message);
                tracing::warn!(error = %error, "stored items are corrupt, starting empty");
                (Vec::new(), Some(error))
            }
        }
    }

    pub fn save_items(&mut self, items: &[PersistedItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items).map_err(|e| StoreError::write(TODOS_KEY, e))?;
        self.store.set(TODOS_KEY, &json)
    }

    /// Load settings, returning (settings, optional_error)
    pub fn load_settings(&self) -> (Settings, Option<StoreError>) {
        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Settings::default(), None),
            Err(e) => {
                tracing::warn!(error = %e, "could not read settings, using defaults");
                return (Settings::default(), Some(e));
            }
        };

        match parse_settings(&raw) {
            Ok(settings) => (settings, None),
            Err(message) => {
                let error = StoreError::parse(SETTINGS_KEY, message);
                tracing::warn!(error = %error, "stored settings are corrupt, using defaults");
                (Settings::default(), Some(error))
            }
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(settings).map_err(|e| StoreError::write(SETTINGS_KEY, e))?;
        self.store.set(SETTINGS_KEY, &json)
    }
}

/// Best-effort extraction of `{id, text}` records.
///
/// Records without a non-blank string `text` are dropped. Numeric ids are
/// accepted and stringified; any other id shape is discarded.
pub fn parse_items(raw: &str) -> Result<Vec<StoredEntry>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Array(records) = value else {
        return Err(format!("expected an array, found {}", json_kind(&value)));
    };

    let total = records.len();
    let entries: Vec<StoredEntry> = records.iter().filter_map(parse_entry).collect();

    if entries.len() < total {
        tracing::warn!(
            skipped = total - entries.len(),
            "dropped unusable records while loading items"
        );
    }
    Ok(entries)
}

fn parse_entry(record: &Value) -> Option<StoredEntry> {
    let text = record.get("text")?.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    let id = match record.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => Some(ItemId::new(id.as_str())),
        Some(Value::Number(n)) => Some(ItemId::new(n.to_string())),
        _ => None,
    };

    Some(StoredEntry {
        id,
        text: text.to_string(),
    })
}

/// Best-effort extraction of the settings record; missing fields use defaults.
pub fn parse_settings(raw: &str) -> Result<Settings, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Object(fields) = value else {
        return Err(format!("expected an object, found {}", json_kind(&value)));
    };

    let mut settings = Settings::default();
    if let Some(enabled) = fields.get("animatedDeletionEnabled").and_then(Value::as_bool) {
        settings.animated_deletion_enabled = enabled;
    }
    Ok(settings)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
