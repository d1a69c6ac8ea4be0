use crate::models::ItemId;

/// Mints millisecond-timestamp ids that never repeat.
///
/// Each id is the current epoch millis, bumped past the largest numeric id
/// minted or observed so far, so two adds in the same millisecond (or a clock
/// stepping backwards) still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that already exists so it is never minted again
    pub fn observe(&mut self, id: &ItemId) {
        if let Some(value) = id.as_millis() {
            self.last = self.last.max(value);
        }
    }

    pub fn next(&mut self, now_millis: u64) -> ItemId {
        let value = now_millis.max(self.last.saturating_add(1));
        self.last = value;
        ItemId::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1_700_000_000_000).as_str(), "1700000000000");
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        let a = ids.next(1000);
        let b = ids.next(1000);
        let c = ids.next(999);
        assert_eq!(a.as_str(), "1000");
        assert_eq!(b.as_str(), "1001");
        assert_eq!(c.as_str(), "1002");
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe(&ItemId::new("5000"));
        ids.observe(&ItemId::new("not-a-number"));
        assert_eq!(ids.next(10).as_str(), "5001");
    }
}
