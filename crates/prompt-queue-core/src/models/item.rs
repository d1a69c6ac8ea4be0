use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, never-reused item identifier.
///
/// Freshly minted ids are decimal millisecond timestamps, but ids loaded from
/// the store are kept verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is a plain decimal number
    pub fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Active,
    /// Counting down to removal; `remaining` is always at least 1
    PendingDeletion { remaining: u32 },
}

/// One queued prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    text: String,
    pub state: LifecycleState,
}

impl Item {
    /// Build an active item. Returns `None` when `raw_text` is blank.
    pub fn new(id: ItemId, raw_text: &str) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            state: LifecycleState::Active,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        self.state == LifecycleState::Active
    }

    pub fn is_pending_deletion(&self) -> bool {
        matches!(self.state, LifecycleState::PendingDeletion { .. })
    }

    pub fn countdown_remaining(&self) -> Option<u32> {
        match self.state {
            LifecycleState::PendingDeletion { remaining } => Some(remaining),
            LifecycleState::Active => None,
        }
    }

    /// "Deleting in N…" while pending, otherwise `None`
    pub fn countdown_label(&self) -> Option<String> {
        self.countdown_remaining()
            .map(|remaining| format!("Deleting in {}…", remaining))
    }

    pub fn to_persisted(&self) -> PersistedItem {
        PersistedItem {
            id: self.id.clone(),
            text: self.text.clone(),
        }
    }
}

/// Stored shape of an item: lifecycle fields are never written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedItem {
    pub id: ItemId,
    pub text: String,
}

/// "1 prompt" / "N prompts"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 prompt".to_string()
    } else {
        format!("{} prompts", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_text() {
        let item = Item::new(ItemId::new("1"), "  Write tests \n").unwrap();
        assert_eq!(item.text(), "Write tests");
        assert!(item.is_active());
        assert_eq!(item.countdown_remaining(), None);
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(Item::new(ItemId::new("1"), "").is_none());
        assert!(Item::new(ItemId::new("1"), "   \t").is_none());
    }

    #[test]
    fn test_countdown_label() {
        let mut item = Item::new(ItemId::new("1"), "X").unwrap();
        assert_eq!(item.countdown_label(), None);
        item.state = LifecycleState::PendingDeletion { remaining: 2 };
        assert!(item.is_pending_deletion());
        assert_eq!(item.countdown_label().as_deref(), Some("Deleting in 2…"));
    }

    #[test]
    fn test_persisted_shape_has_only_id_and_text() {
        let mut item = Item::new(ItemId::new("42"), "X").unwrap();
        item.state = LifecycleState::PendingDeletion { remaining: 3 };
        let json = serde_json::to_value(item.to_persisted()).unwrap();
        assert_eq!(json, serde_json::json!({"id": "42", "text": "X"}));
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 prompts");
        assert_eq!(count_label(1), "1 prompt");
        assert_eq!(count_label(5), "5 prompts");
    }

    #[test]
    fn test_id_as_millis() {
        assert_eq!(ItemId::new("1700000000000").as_millis(), Some(1_700_000_000_000));
        assert_eq!(ItemId::new("draft-abc").as_millis(), None);
    }
}
