//! In-memory state store.
//!
//! Backs ephemeral runs and tests. Nothing survives the process.

use crate::Result;
use crate::models::{CapturedItem, CategoryMode, SubscriptionTier};
use crate::storage::StateStore;

/// In-memory state store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<CapturedItem>,
    mode: CategoryMode,
    tier: SubscriptionTier,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with state, for tests.
    #[must_use]
    pub const fn with_state(
        items: Vec<CapturedItem>,
        mode: CategoryMode,
        tier: SubscriptionTier,
    ) -> Self {
        Self { items, mode, tier }
    }
}

impl StateStore for MemoryStore {
    fn load_items(&self) -> Vec<CapturedItem> {
        self.items.clone()
    }

    fn save_items(&mut self, items: &[CapturedItem]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }

    fn load_mode(&self) -> CategoryMode {
        self.mode
    }

    fn save_mode(&mut self, mode: CategoryMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn load_tier(&self) -> SubscriptionTier {
        self.tier
    }

    fn save_tier(&mut self, tier: SubscriptionTier) -> Result<()> {
        self.tier = tier;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = MemoryStore::new();
        assert!(store.load_items().is_empty());
        assert_eq!(store.load_mode(), CategoryMode::General);
        assert_eq!(store.load_tier(), SubscriptionTier::Basic);
    }

    #[test]
    fn test_saves_are_visible_to_loads() {
        let mut store = MemoryStore::new();
        store.save_mode(CategoryMode::Academic).unwrap();
        store.save_tier(SubscriptionTier::Pro).unwrap();
        assert_eq!(store.load_mode(), CategoryMode::Academic);
        assert_eq!(store.load_tier(), SubscriptionTier::Pro);
    }
}
