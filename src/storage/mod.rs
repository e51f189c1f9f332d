//! Persisted application state.
//!
//! State lives in three independently-keyed records: the captured-item list,
//! the active category mode, and the active subscription tier. Each record
//! loads, saves, and fails in isolation.

mod filesystem;
mod memory;

pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;

use crate::Result;
use crate::models::{CapturedItem, CategoryMode, SubscriptionTier};

/// Trait for state store backends.
///
/// Loads are infallible by contract: a missing or corrupt record yields that
/// record's default (empty list, [`CategoryMode::General`],
/// [`SubscriptionTier::Basic`]) and never affects the other two records.
/// Saves are write-through; a save failure is reported but the in-memory
/// state stays authoritative.
pub trait StateStore: Send {
    /// Loads the captured-item list, newest first.
    fn load_items(&self) -> Vec<CapturedItem>;

    /// Persists the captured-item list.
    fn save_items(&mut self, items: &[CapturedItem]) -> Result<()>;

    /// Loads the active category mode.
    fn load_mode(&self) -> CategoryMode;

    /// Persists the active category mode.
    fn save_mode(&mut self, mode: CategoryMode) -> Result<()>;

    /// Loads the active subscription tier.
    fn load_tier(&self) -> SubscriptionTier;

    /// Persists the active subscription tier.
    fn save_tier(&mut self, tier: SubscriptionTier) -> Result<()>;
}
