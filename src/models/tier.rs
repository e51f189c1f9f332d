//! Subscription tier: the totally ordered capability level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator's subscription level.
///
/// Tiers are totally ordered (`Basic < Pro < Quantum`) with monotonically
/// increasing capability. Set by explicit operator action, persisted, and
/// defaulting to [`SubscriptionTier::Basic`] when absent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier with capped capture credits and base-resolution visuals.
    #[default]
    Basic,
    /// Paid tier unlocking strategy planning and high-resolution visuals.
    Pro,
    /// Top tier; additionally unlocks video simulation.
    Quantum,
}

impl SubscriptionTier {
    /// Returns all tier variants, lowest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Basic, Self::Pro, Self::Quantum]
    }

    /// Returns the tier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
            Self::Quantum => "quantum",
        }
    }

    /// Parses a tier from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" | "free" => Some(Self::Basic),
            "pro" => Some(Self::Pro),
            "quantum" => Some(Self::Quantum),
            _ => None,
        }
    }

    /// Returns true if this tier is a paid tier.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        !matches!(self, Self::Basic)
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(SubscriptionTier::Basic < SubscriptionTier::Pro);
        assert!(SubscriptionTier::Pro < SubscriptionTier::Quantum);
    }

    #[test]
    fn test_parse_roundtrip() {
        for tier in SubscriptionTier::all() {
            assert_eq!(SubscriptionTier::parse(tier.as_str()), Some(*tier));
        }
        assert_eq!(
            SubscriptionTier::parse("QUANTUM"),
            Some(SubscriptionTier::Quantum)
        );
        assert_eq!(SubscriptionTier::parse("platinum"), None);
    }

    #[test]
    fn test_default_is_basic() {
        assert_eq!(SubscriptionTier::default(), SubscriptionTier::Basic);
        assert!(!SubscriptionTier::default().is_paid());
    }
}
