use crate::models::{count_label, Item, ItemId, Settings};

/// Read-only view of the controller handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub copied_item_id: Option<ItemId>,
    pub newly_added_item_id: Option<ItemId>,
    pub settings: Settings,
    /// Bumped on every mutation; equal revisions mean equal snapshots
    pub revision: u64,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn count_label(&self) -> String {
        count_label(self.items.len())
    }

    pub fn is_copied(&self, id: &ItemId) -> bool {
        self.copied_item_id.as_ref() == Some(id)
    }

    pub fn is_newly_added(&self, id: &ItemId) -> bool {
        self.newly_added_item_id.as_ref() == Some(id)
    }
}
