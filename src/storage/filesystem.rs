//! Filesystem-based state store.
//!
//! Stores the three state records as independent JSON files under a data
//! directory. Each file's absence or corruption yields that record's default
//! without touching the other two, and is never surfaced to the operator.

use crate::models::{
    CapturedItem, CategoryMode, ItemId, ItemKind, ItemMetadata, Priority, SubscriptionTier,
};
use crate::storage::StateStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for the captured-item list.
const ITEMS_FILE: &str = "items.json";

/// File name for the active category mode.
const MODE_FILE: &str = "mode.json";

/// File name for the active subscription tier.
const TIER_FILE: &str = "tier.json";

/// Serializable item format for filesystem storage.
///
/// Decoupled from [`CapturedItem`] so stored data can be read leniently:
/// unknown kinds, modes, and priorities fall back to their defaults per
/// field instead of discarding the record.
#[derive(Debug, Serialize, Deserialize)]
struct StoredItem {
    id: String,
    kind: String,
    content: String,
    created_at: u64,
    category: String,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&CapturedItem> for StoredItem {
    fn from(item: &CapturedItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            kind: item.kind.as_str().to_string(),
            content: item.content.clone(),
            created_at: item.created_at,
            category: item.category.as_str().to_string(),
            priority: item
                .metadata
                .as_ref()
                .and_then(|m| m.priority)
                .map(|p| p.as_str().to_string()),
            tags: item
                .metadata
                .as_ref()
                .map(|m| m.tags.clone())
                .unwrap_or_default(),
        }
    }
}

impl StoredItem {
    fn to_item(&self) -> CapturedItem {
        let priority = self.priority.as_deref().and_then(Priority::parse);
        let metadata = if priority.is_none() && self.tags.is_empty() {
            None
        } else {
            Some(ItemMetadata {
                priority,
                tags: self.tags.clone(),
            })
        };

        CapturedItem {
            id: ItemId::new(&self.id),
            kind: ItemKind::parse(&self.kind).unwrap_or_default(),
            content: self.content.clone(),
            created_at: self.created_at,
            category: CategoryMode::parse(&self.category).unwrap_or_default(),
            metadata,
        }
    }
}

/// Filesystem state store rooted at a data directory.
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Creates a store rooted at the given directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| Error::OperationFailed {
            operation: "create_data_dir".to_string(),
            cause: format!("{}: {e}", root.display()),
        })?;
        Ok(Self { root })
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads and parses one record file, returning `None` on absence or
    /// corruption (logged, never raised).
    fn read_record<T: serde::de::DeserializeOwned>(&self, file: &str) -> Option<T> {
        let path = self.root.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Failed to read state record");
                return None;
            },
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Corrupt state record, using default");
                None
            },
        }
    }

    /// Serializes and writes one record file via a temporary sibling, so a
    /// failed write never leaves a truncated record behind.
    fn write_record<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let path = self.root.join(file);
        let tmp = self.root.join(format!("{file}.tmp"));

        let contents =
            serde_json::to_string_pretty(value).map_err(|e| Error::OperationFailed {
                operation: "serialize_state_record".to_string(),
                cause: e.to_string(),
            })?;

        fs::write(&tmp, contents).map_err(|e| Error::OperationFailed {
            operation: "write_state_record".to_string(),
            cause: format!("{}: {e}", tmp.display()),
        })?;

        fs::rename(&tmp, &path).map_err(|e| Error::OperationFailed {
            operation: "write_state_record".to_string(),
            cause: format!("{}: {e}", path.display()),
        })
    }
}

impl StateStore for FilesystemStore {
    fn load_items(&self) -> Vec<CapturedItem> {
        self.read_record::<Vec<StoredItem>>(ITEMS_FILE)
            .map(|stored| stored.iter().map(StoredItem::to_item).collect())
            .unwrap_or_default()
    }

    fn save_items(&mut self, items: &[CapturedItem]) -> Result<()> {
        let stored: Vec<StoredItem> = items.iter().map(StoredItem::from).collect();
        self.write_record(ITEMS_FILE, &stored)
    }

    fn load_mode(&self) -> CategoryMode {
        self.read_record::<String>(MODE_FILE)
            .and_then(|s| CategoryMode::parse(&s))
            .unwrap_or_default()
    }

    fn save_mode(&mut self, mode: CategoryMode) -> Result<()> {
        self.write_record(MODE_FILE, &mode.as_str())
    }

    fn load_tier(&self) -> SubscriptionTier {
        self.read_record::<String>(TIER_FILE)
            .and_then(|s| SubscriptionTier::parse(&s))
            .unwrap_or_default()
    }

    fn save_tier(&mut self, tier: SubscriptionTier) -> Result<()> {
        self.write_record(TIER_FILE, &tier.as_str())
    }
}
