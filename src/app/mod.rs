//! Application state container and view routing.
//!
//! [`AppState`] is the single source of truth for items, mode, and tier. It
//! is owned by the root of the program and mutated only through the defined
//! append/set operations, each of which writes through to the backing store
//! before returning. Views receive read-only slices via [`route`].

use crate::models::{CapturedItem, CategoryMode, Screen, SubscriptionTier};
use crate::services::remaining_credits;
use crate::storage::StateStore;

/// The owned application state.
///
/// Loaded once from a [`StateStore`]; every record loads independently so a
/// corrupt record cannot take the others down. The in-memory state stays
/// authoritative if a write-through fails.
pub struct AppState<S> {
    store: S,
    items: Vec<CapturedItem>,
    mode: CategoryMode,
    tier: SubscriptionTier,
    screen: Screen,
}

impl<S: StateStore> AppState<S> {
    /// Loads application state from the given store.
    pub fn load(store: S) -> Self {
        let items = store.load_items();
        let mode = store.load_mode();
        let tier = store.load_tier();
        Self {
            store,
            items,
            mode,
            tier,
            screen: Screen::default(),
        }
    }

    /// Returns all captured items, newest first.
    #[must_use]
    pub fn items(&self) -> &[CapturedItem] {
        &self.items
    }

    /// Returns the items visible under the active mode, newest first.
    ///
    /// Items captured under [`CategoryMode::General`] are cross-cutting and
    /// always included.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&CapturedItem> {
        self.items
            .iter()
            .filter(|item| item.is_visible_under(self.mode))
            .collect()
    }

    /// Returns the active category mode.
    #[must_use]
    pub const fn mode(&self) -> CategoryMode {
        self.mode
    }

    /// Returns the active subscription tier.
    #[must_use]
    pub const fn tier(&self) -> SubscriptionTier {
        self.tier
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns read access to the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the remaining capture credits for display, if capped.
    #[must_use]
    pub fn remaining_credits(&self) -> Option<u32> {
        remaining_credits(self.tier, self.visible_items().len())
    }

    /// Appends an item to the front of the collection and persists the list.
    ///
    /// The collection only grows; a persistence failure is logged and the
    /// in-memory list keeps the item.
    pub fn append_item(&mut self, item: CapturedItem) {
        self.items.insert(0, item);
        if let Err(e) = self.store.save_items(&self.items) {
            tracing::warn!(error = %e, "Failed to persist item list");
        }
    }

    /// Switches the active category mode and persists it.
    pub fn set_mode(&mut self, mode: CategoryMode) {
        self.mode = mode;
        if let Err(e) = self.store.save_mode(mode) {
            tracing::warn!(error = %e, "Failed to persist category mode");
        }
    }

    /// Sets the subscription tier, persists it, and returns to the dashboard.
    pub fn set_tier(&mut self, tier: SubscriptionTier) {
        self.tier = tier;
        self.screen = Screen::Dashboard;
        if let Err(e) = self.store.save_tier(tier) {
            tracing::warn!(error = %e, "Failed to persist subscription tier");
        }
    }

    /// Switches the active screen. Transitions are unconditional.
    pub const fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }
}

/// A composed, routed view of one screen.
///
/// Each variant carries only the state slice its screen needs; no view can
/// reach state it was not handed.
#[derive(Debug)]
pub enum View<'a> {
    /// Diagnostic overview over the visible items.
    Dashboard {
        /// Items visible under the active mode, newest first.
        items: Vec<&'a CapturedItem>,
        /// Active mode.
        mode: CategoryMode,
        /// Active tier.
        tier: SubscriptionTier,
        /// Remaining capture credits, if capped.
        credits: Option<u32>,
    },
    /// Strategy plan builder.
    Strategist {
        /// Active tier, for gate messaging.
        tier: SubscriptionTier,
    },
    /// Archive of every captured item.
    Vault {
        /// All items, newest first.
        items: &'a [CapturedItem],
    },
    /// Visual generation console.
    Visualizer {
        /// Active tier, for gate messaging.
        tier: SubscriptionTier,
    },
    /// Plan selection.
    Subscription {
        /// Current tier, marked in the plan cards.
        tier: SubscriptionTier,
    },
    /// Audit and propagation console.
    Propagation {
        /// Active tier.
        tier: SubscriptionTier,
        /// Total item count shown in the playback.
        item_count: usize,
    },
}

/// Routes the active screen to exactly one composed view.
///
/// Single-level dispatch over the closed [`Screen`] set; unknown screen
/// names already fell back to [`Screen::Dashboard`] at the parse boundary.
#[must_use]
pub fn route<S: StateStore>(state: &AppState<S>) -> View<'_> {
    match state.screen() {
        Screen::Dashboard => View::Dashboard {
            items: state.visible_items(),
            mode: state.mode(),
            tier: state.tier(),
            credits: state.remaining_credits(),
        },
        Screen::Strategist => View::Strategist { tier: state.tier() },
        Screen::Vault => View::Vault {
            items: state.items(),
        },
        Screen::Visualizer => View::Visualizer { tier: state.tier() },
        Screen::Subscription => View::Subscription { tier: state.tier() },
        Screen::Propagation => View::Propagation {
            tier: state.tier(),
            item_count: state.items().len(),
        },
    }
}
