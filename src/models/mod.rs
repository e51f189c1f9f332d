//! Data models for neuros.
//!
//! This module contains the core data structures used throughout the system.

mod item;
mod mode;
mod plan;
mod screen;
mod tier;
mod visual;

pub use item::{CapturedItem, ItemId, ItemKind, ItemMetadata, Priority};
pub use mode::CategoryMode;
pub use plan::{ReasoningStep, StrategyPlan};
pub use screen::Screen;
pub use tier::SubscriptionTier;
pub use visual::{ImageResolution, VideoArtifact, VisualArtifact};
