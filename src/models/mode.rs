//! Category mode: the active filter and context domain for captures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sector a capture belongs to.
///
/// Exactly one mode is active at a time. Items captured under
/// [`CategoryMode::General`] are considered visible under every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// Study and research work.
    Academic,
    /// Business and commerce work.
    Commerce,
    /// Design and creative work.
    Creative,
    /// Everyday life. The cross-cutting default.
    #[default]
    General,
}

impl CategoryMode {
    /// Returns all mode variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Academic, Self::Commerce, Self::Creative, Self::General]
    }

    /// Returns the mode as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Commerce => "commerce",
            Self::Creative => "creative",
            Self::General => "general",
        }
    }

    /// Returns the operator-facing sector label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Academic => "student",
            Self::Commerce => "business",
            Self::Creative => "design",
            Self::General => "life",
        }
    }

    /// Parses a mode from a string. Accepts both mode names and sector labels.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "academic" | "student" => Some(Self::Academic),
            "commerce" | "ecommerce" | "business" => Some(Self::Commerce),
            "creative" | "design" => Some(Self::Creative),
            "general" | "life" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
