//! Captured item types and identifiers.

use super::CategoryMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a captured item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh ID for an item of the given kind.
    #[must_use]
    pub fn generate(kind: ItemKind) -> Self {
        Self(format!("{}_{}", kind.as_str(), uuid::Uuid::new_v4()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The typed classification of a captured item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemKind {
    /// An actionable directive.
    Task,
    /// A dated occurrence.
    Event,
    /// Free-form reference text. The fallback kind when classification
    /// fails or is missing.
    #[default]
    Note,
    /// A monetary outflow.
    Expense,
    /// A recurring behavior being tracked.
    Habit,
    /// A spark worth revisiting.
    Idea,
    /// Classified but not recognized.
    Unknown,
}

impl ItemKind {
    /// Returns all kind variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Task,
            Self::Event,
            Self::Note,
            Self::Expense,
            Self::Habit,
            Self::Idea,
            Self::Unknown,
        ]
    }

    /// Returns the kind as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
            Self::Note => "note",
            Self::Expense => "expense",
            Self::Habit => "habit",
            Self::Idea => "idea",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "task" => Some(Self::Task),
            "event" => Some(Self::Event),
            "note" => Some(Self::Note),
            "expense" => Some(Self::Expense),
            "habit" => Some(Self::Habit),
            "idea" => Some(Self::Idea),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Med,
    /// High urgency.
    High,
}

impl Priority {
    /// Returns the priority as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Med => "med",
            Self::High => "high",
        }
    }

    /// Parses a priority from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "med" | "medium" => Some(Self::Med),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional metadata attached by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Suggested priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Suggested tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single captured, classified item.
///
/// Items are immutable once created; the collection only grows, ordered
/// newest-first by insertion. There are no edit or delete operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedItem {
    /// Unique identifier, generated at capture time.
    pub id: ItemId,
    /// Classified kind.
    pub kind: ItemKind,
    /// Display text: classifier output, or the raw input on failure.
    pub content: String,
    /// Capture timestamp (Unix epoch seconds).
    pub created_at: u64,
    /// The category mode active at capture time.
    pub category: CategoryMode,
    /// Optional classifier metadata.
    pub metadata: Option<ItemMetadata>,
}

impl CapturedItem {
    /// Returns true if this item is visible under the given mode.
    ///
    /// Items captured under [`CategoryMode::General`] are cross-cutting and
    /// visible under every mode.
    #[must_use]
    pub fn is_visible_under(&self, mode: CategoryMode) -> bool {
        self.category == mode || self.category == CategoryMode::General
    }
}
