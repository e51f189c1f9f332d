//! # Neuros
//!
//! An AI-assisted capture console and productivity dashboard for the terminal.
//!
//! Neuros takes free-form operator input, classifies it into typed records
//! through a hosted generative engine, and renders the growing collection in
//! themed views (dashboard, strategist, vault, visualizer, subscription,
//! propagation). All state persists to three independent JSON records under a
//! local data directory; there is no server and no database.
//!
//! ## Example
//!
//! ```rust,ignore
//! use neuros::{CategoryMode, GeminiClient, IngestionService};
//!
//! let service = IngestionService::new(GeminiClient::new());
//! let item = service.ingest("buy milk tomorrow", CategoryMode::General)?;
//! ```
//!
//! Classification is best-effort by contract: if the engine is unreachable or
//! returns garbage, the input is still kept as a plain note. Operator input is
//! never dropped.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod app;
pub mod config;
pub mod engine;
pub mod models;
pub mod rendering;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use app::{AppState, View, route};
pub use config::{EngineConfig, NeuralConfig};
pub use engine::{Classification, EngineHttpConfig, GeminiClient, GenerativeEngine};
pub use models::{
    CapturedItem, CategoryMode, ImageResolution, ItemId, ItemKind, ItemMetadata, Priority,
    ReasoningStep, Screen, StrategyPlan, SubscriptionTier, VideoArtifact, VisualArtifact,
};
pub use services::{
    Feature, IngestionService, PropagationService, StrategistService, VisualizerService,
    can_access, remaining_credits,
};
pub use storage::{FilesystemStore, MemoryStore, StateStore};

/// Error type for neuros operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty capture text, empty strategy goal, unparsable CLI values |
/// | `OperationFailed` | Engine HTTP failures, malformed engine responses, state-file writes |
/// | `Unauthorized` | Engine API key missing/malformed, HTTP 401/403 from the engine |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - Capture text is empty after trimming
    /// - A strategy goal is empty
    /// - A visual prompt or refinement instruction is empty
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - An engine request fails in transport or returns a non-success status
    /// - An engine response cannot be parsed into its typed result
    /// - A state file cannot be written
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// Engine authorization is missing or rejected.
    ///
    /// Raised when:
    /// - No API key is configured for the generative engine
    /// - The configured key has an obviously invalid format
    /// - The engine returns HTTP 401 or 403
    ///
    /// Callers distinguish this from generic failure so the operator can be
    /// prompted to re-authorize instead of retrying.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type alias for neuros operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the current Unix timestamp in seconds.
///
/// Centralized so capture and rendering agree on one clock. Uses
/// `SystemTime::now()` with fallback to 0 if the system clock is before the
/// Unix epoch.
///
/// # Examples
///
/// ```rust
/// use neuros::current_timestamp;
///
/// let ts = current_timestamp();
/// assert!(ts > 0);
/// ```
#[must_use]
pub fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");

        let err = Error::Unauthorized("key missing".to_string());
        assert_eq!(err.to_string(), "unauthorized: key missing");
    }
}
