//! Persisted-state integration tests.
//!
//! Exercises the filesystem store through the application state container:
//! - Round-trips items, mode, and tier across process-style reloads
//! - Per-record corruption stays isolated and silent
//! - Every mutation is flushed before the next action

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use neuros::{
    AppState, CapturedItem, CategoryMode, FilesystemStore, ItemId, ItemKind, ItemMetadata,
    Priority, StateStore, SubscriptionTier,
};
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn open(dir: &TempDir) -> AppState<FilesystemStore> {
    let store = FilesystemStore::new(dir.path()).expect("data dir must be creatable");
    AppState::load(store)
}

fn item(content: &str, category: CategoryMode) -> CapturedItem {
    CapturedItem {
        id: ItemId::generate(ItemKind::Task),
        kind: ItemKind::Task,
        content: content.to_string(),
        created_at: 1_700_000_000,
        category,
        metadata: Some(ItemMetadata {
            priority: Some(Priority::High),
            tags: vec!["t".to_string()],
        }),
    }
}

// ============================================================================
// Round-trips
// ============================================================================

#[test]
fn state_survives_reload() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = open(&dir);
        state.append_item(item("first", CategoryMode::General));
        state.append_item(item("second", CategoryMode::Commerce));
        state.set_mode(CategoryMode::Commerce);
        state.set_tier(SubscriptionTier::Quantum);
    }

    let state = open(&dir);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[0].content, "second");
    assert_eq!(state.items()[1].content, "first");
    assert_eq!(state.mode(), CategoryMode::Commerce);
    assert_eq!(state.tier(), SubscriptionTier::Quantum);
}

#[test]
fn metadata_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = open(&dir);
        state.append_item(item("with metadata", CategoryMode::Creative));
    }

    let state = open(&dir);
    let metadata = state.items()[0]
        .metadata
        .as_ref()
        .expect("metadata must survive the round-trip");
    assert_eq!(metadata.priority, Some(Priority::High));
    assert_eq!(metadata.tags, vec!["t".to_string()]);
}

#[test]
fn each_mutation_is_flushed_immediately() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);

    state.append_item(item("flushed", CategoryMode::General));
    // A second reader sees the write before any further action.
    let observer = FilesystemStore::new(dir.path()).unwrap();
    assert_eq!(observer.load_items().len(), 1);

    state.set_tier(SubscriptionTier::Pro);
    assert_eq!(observer.load_tier(), SubscriptionTier::Pro);
}

// ============================================================================
// Corruption Isolation
// ============================================================================

#[test]
fn corrupt_items_record_leaves_mode_and_tier_intact() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = open(&dir);
        state.append_item(item("will be lost", CategoryMode::General));
        state.set_mode(CategoryMode::Academic);
        state.set_tier(SubscriptionTier::Pro);
    }

    std::fs::write(dir.path().join("items.json"), "{{{").unwrap();

    let state = open(&dir);
    assert!(state.items().is_empty());
    assert_eq!(state.mode(), CategoryMode::Academic);
    assert_eq!(state.tier(), SubscriptionTier::Pro);
}

#[test]
fn corrupt_mode_and_tier_default_independently() {
    let dir = TempDir::new().unwrap();

    {
        let mut state = open(&dir);
        state.append_item(item("kept", CategoryMode::General));
    }

    std::fs::write(dir.path().join("mode.json"), "not json at all").unwrap();
    std::fs::write(dir.path().join("tier.json"), "\"diamond\"").unwrap();

    let state = open(&dir);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.mode(), CategoryMode::General);
    assert_eq!(state.tier(), SubscriptionTier::Basic);
}

#[test]
fn fresh_directory_yields_all_defaults() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);

    assert!(state.items().is_empty());
    assert_eq!(state.mode(), CategoryMode::General);
    assert_eq!(state.tier(), SubscriptionTier::Basic);
    assert_eq!(state.remaining_credits(), Some(10));
}
