//! Screen enumeration for view routing.

use std::fmt;

/// The active application screen.
///
/// Transitions are unconditional: any screen is reachable from any other by
/// direct operator action. Unknown screen names fall back to
/// [`Screen::Dashboard`] at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// System diagnostic overview and telemetry log.
    #[default]
    Dashboard,
    /// Strategy plan builder.
    Strategist,
    /// Archive of all captured items, grouped by kind.
    Vault,
    /// Image and video generation console.
    Visualizer,
    /// Plan selection.
    Subscription,
    /// Simulated audit and propagation console.
    Propagation,
}

impl Screen {
    /// Returns all screen variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Dashboard,
            Self::Strategist,
            Self::Vault,
            Self::Visualizer,
            Self::Subscription,
            Self::Propagation,
        ]
    }

    /// Returns the screen as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Strategist => "strategist",
            Self::Vault => "vault",
            Self::Visualizer => "visualizer",
            Self::Subscription => "subscription",
            Self::Propagation => "propagation",
        }
    }

    /// Parses a screen from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dashboard" => Some(Self::Dashboard),
            "strategist" => Some(Self::Strategist),
            "vault" => Some(Self::Vault),
            "visualizer" => Some(Self::Visualizer),
            "subscription" | "billing" => Some(Self::Subscription),
            "propagation" | "deployment" => Some(Self::Propagation),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
