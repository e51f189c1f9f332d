//! Tier gate: pure feature-access control.
//!
//! A pure function of `(feature, tier)`. No side effects, no I/O. On denial
//! the caller's contract is to route the operator to the subscription screen
//! rather than failing.

use crate::models::{ImageResolution, SubscriptionTier};
use std::fmt;

/// Daily capture credit capacity on the free tier. Display only; never
/// enforced as a hard block on ingestion.
pub const BASIC_DAILY_CAPACITY: u32 = 10;

/// Gateable features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Strategy plan building.
    StrategyPlanning,
    /// Image generation above the base resolution.
    HighResImaging,
    /// Video simulation.
    VideoSimulation,
    /// The diagnostic dashboard.
    Dashboard,
    /// Image generation at the base resolution.
    BaseImaging,
    /// Capture ingestion.
    Capture,
}

impl Feature {
    /// Returns all feature variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::StrategyPlanning,
            Self::HighResImaging,
            Self::VideoSimulation,
            Self::Dashboard,
            Self::BaseImaging,
            Self::Capture,
        ]
    }

    /// Returns the feature as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StrategyPlanning => "strategy-planning",
            Self::HighResImaging => "high-res-imaging",
            Self::VideoSimulation => "video-simulation",
            Self::Dashboard => "dashboard",
            Self::BaseImaging => "base-imaging",
            Self::Capture => "capture",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns whether the given tier may use the given feature.
///
/// Deterministic and total over the feature table: strategy planning and
/// high-resolution imaging require a paid tier; video simulation requires
/// exactly [`SubscriptionTier::Quantum`]; everything else is unrestricted.
#[must_use]
pub const fn can_access(feature: Feature, tier: SubscriptionTier) -> bool {
    match feature {
        Feature::StrategyPlanning | Feature::HighResImaging => {
            matches!(tier, SubscriptionTier::Pro | SubscriptionTier::Quantum)
        },
        Feature::VideoSimulation => matches!(tier, SubscriptionTier::Quantum),
        Feature::Dashboard | Feature::BaseImaging | Feature::Capture => true,
    }
}

/// Returns whether the given tier may render images at the given resolution.
#[must_use]
pub const fn can_render_at(resolution: ImageResolution, tier: SubscriptionTier) -> bool {
    if resolution.is_premium() {
        can_access(Feature::HighResImaging, tier)
    } else {
        can_access(Feature::BaseImaging, tier)
    }
}

/// Returns the remaining capture credits for display.
///
/// `None` means unlimited. For the free tier this is the daily capacity
/// minus the count of items visible under the active mode, saturating at
/// zero.
#[must_use]
pub fn remaining_credits(tier: SubscriptionTier, visible_count: usize) -> Option<u32> {
    match tier {
        SubscriptionTier::Basic => {
            let used = u32::try_from(visible_count).unwrap_or(u32::MAX);
            Some(BASIC_DAILY_CAPACITY.saturating_sub(used))
        },
        SubscriptionTier::Pro | SubscriptionTier::Quantum => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Feature::StrategyPlanning, SubscriptionTier::Basic => false)]
    #[test_case(Feature::StrategyPlanning, SubscriptionTier::Pro => true)]
    #[test_case(Feature::StrategyPlanning, SubscriptionTier::Quantum => true)]
    #[test_case(Feature::HighResImaging, SubscriptionTier::Basic => false)]
    #[test_case(Feature::HighResImaging, SubscriptionTier::Pro => true)]
    #[test_case(Feature::HighResImaging, SubscriptionTier::Quantum => true)]
    #[test_case(Feature::VideoSimulation, SubscriptionTier::Basic => false)]
    #[test_case(Feature::VideoSimulation, SubscriptionTier::Pro => false)]
    #[test_case(Feature::VideoSimulation, SubscriptionTier::Quantum => true)]
    #[test_case(Feature::Dashboard, SubscriptionTier::Basic => true)]
    #[test_case(Feature::BaseImaging, SubscriptionTier::Basic => true)]
    #[test_case(Feature::Capture, SubscriptionTier::Basic => true)]
    fn test_gate_table(feature: Feature, tier: SubscriptionTier) -> bool {
        can_access(feature, tier)
    }

    #[test]
    fn test_gate_is_deterministic() {
        for feature in Feature::all() {
            for tier in SubscriptionTier::all() {
                assert_eq!(
                    can_access(*feature, *tier),
                    can_access(*feature, *tier),
                );
            }
        }
    }

    #[test_case(ImageResolution::OneK, SubscriptionTier::Basic => true)]
    #[test_case(ImageResolution::TwoK, SubscriptionTier::Basic => false)]
    #[test_case(ImageResolution::FourK, SubscriptionTier::Basic => false)]
    #[test_case(ImageResolution::FourK, SubscriptionTier::Pro => true)]
    #[test_case(ImageResolution::OneK, SubscriptionTier::Quantum => true)]
    fn test_resolution_gate(resolution: ImageResolution, tier: SubscriptionTier) -> bool {
        can_render_at(resolution, tier)
    }

    #[test]
    fn test_basic_credits_count_down() {
        assert_eq!(remaining_credits(SubscriptionTier::Basic, 0), Some(10));
        assert_eq!(remaining_credits(SubscriptionTier::Basic, 4), Some(6));
        assert_eq!(remaining_credits(SubscriptionTier::Basic, 10), Some(0));
    }

    #[test]
    fn test_basic_credits_saturate_at_zero() {
        assert_eq!(remaining_credits(SubscriptionTier::Basic, 25), Some(0));
    }

    #[test]
    fn test_paid_tiers_are_unlimited() {
        assert_eq!(remaining_credits(SubscriptionTier::Pro, 500), None);
        assert_eq!(remaining_credits(SubscriptionTier::Quantum, 0), None);
    }
}
