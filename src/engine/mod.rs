//! Generative engine abstraction.
//!
//! Provides a unified interface to the hosted generative collaborators:
//! capture classification, strategy planning, and visual generation. The
//! engine is treated as opaque; no retry or backoff contract is imposed here.

mod gemini;

pub use gemini::GeminiClient;

use crate::models::{
    CategoryMode, ImageResolution, ItemKind, ItemMetadata, StrategyPlan, VideoArtifact,
    VisualArtifact,
};
use crate::Result;
use serde::Deserialize;
use std::time::Duration;

/// Trait for generative engine providers.
pub trait GenerativeEngine: Send + Sync {
    /// The provider name.
    fn name(&self) -> &'static str;

    /// Classifies free-form capture text into a typed record.
    ///
    /// The active mode is passed as sector context. The result may be
    /// partial; the ingestion boundary applies defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response parsing fails. Callers of
    /// the ingestion path recover from every error here.
    fn classify_capture(&self, text: &str, mode: CategoryMode) -> Result<Classification>;

    /// Architects an execution plan for a goal under the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; no partial plan is produced.
    fn develop_strategy(&self, goal: &str, context: &str) -> Result<StrategyPlan>;

    /// Generates an image for the prompt at the requested resolution.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Unauthorized`] when authorization is missing
    /// or rejected, and [`crate::Error::OperationFailed`] otherwise.
    fn generate_visual(&self, prompt: &str, resolution: ImageResolution) -> Result<VisualArtifact>;

    /// Refines an existing image with an edit instruction.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GenerativeEngine::generate_visual`].
    fn edit_visual(&self, artifact: &VisualArtifact, instruction: &str) -> Result<VisualArtifact>;

    /// Synthesizes a short motion simulation for the prompt.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GenerativeEngine::generate_visual`]. May block for
    /// the duration of the engine's long-running operation.
    fn simulate_video(&self, prompt: &str) -> Result<VideoArtifact>;
}

/// Classifier result for a single capture.
///
/// A strongly-typed optional-field structure: every field the collaborator
/// may omit is an `Option`, validated and defaulted at the ingestion boundary
/// so downstream code never handles raw untyped data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Classification {
    /// Suggested kind. Missing defaults to [`ItemKind::Note`].
    #[serde(default, rename = "type")]
    pub kind: Option<ItemKind>,
    /// Rewritten display text. Missing defaults to the raw input.
    #[serde(default)]
    pub content: Option<String>,
    /// Suggested priority and tags.
    #[serde(default)]
    pub metadata: Option<ItemMetadata>,
}

/// HTTP client configuration for engine providers.
#[derive(Debug, Clone, Copy)]
pub struct EngineHttpConfig {
    /// Request timeout in milliseconds (0 to disable).
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds (0 to disable).
    pub connect_timeout_ms: u64,
}

impl Default for EngineHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            connect_timeout_ms: 3_000,
        }
    }
}

impl EngineHttpConfig {
    /// Loads HTTP configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Loads HTTP configuration from config file settings.
    #[must_use]
    pub fn from_config(config: &crate::config::EngineConfig) -> Self {
        let mut settings = Self::default();
        if let Some(timeout_ms) = config.timeout_ms {
            settings.timeout_ms = timeout_ms;
        }
        if let Some(connect_timeout_ms) = config.connect_timeout_ms {
            settings.connect_timeout_ms = connect_timeout_ms;
        }
        settings
    }

    /// Applies environment variable overrides.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("NEUROS_ENGINE_TIMEOUT_MS") {
            if let Ok(timeout_ms) = v.parse::<u64>() {
                self.timeout_ms = timeout_ms;
            }
        }
        if let Ok(v) = std::env::var("NEUROS_ENGINE_CONNECT_TIMEOUT_MS") {
            if let Ok(connect_timeout_ms) = v.parse::<u64>() {
                self.connect_timeout_ms = connect_timeout_ms;
            }
        }
        self
    }
}

/// Builds a blocking HTTP client for engine requests with configured timeouts.
#[must_use]
pub fn build_http_client(config: EngineHttpConfig) -> reqwest::blocking::Client {
    let mut builder = reqwest::blocking::Client::builder();
    if config.timeout_ms > 0 {
        builder = builder.timeout(Duration::from_millis(config.timeout_ms));
    }
    if config.connect_timeout_ms > 0 {
        builder = builder.connect_timeout(Duration::from_millis(config.connect_timeout_ms));
    }

    builder.build().unwrap_or_else(|err| {
        tracing::warn!("Failed to build engine HTTP client: {err}");
        reqwest::blocking::Client::new()
    })
}

/// Parses a classification response from engine output.
///
/// Handles raw JSON and markdown code blocks.
pub(crate) fn parse_classification(response: &str) -> Result<Classification> {
    let json_str = extract_json_from_response(response);
    serde_json::from_str(json_str).map_err(|e| crate::Error::OperationFailed {
        operation: "parse_classification".to_string(),
        cause: format!("Invalid JSON: {e}. Response: {response}"),
    })
}

/// Parses a strategy plan response from engine output.
pub(crate) fn parse_strategy_plan(response: &str) -> Result<StrategyPlan> {
    let json_str = extract_json_from_response(response);
    serde_json::from_str(json_str).map_err(|e| crate::Error::OperationFailed {
        operation: "parse_strategy_plan".to_string(),
        cause: format!("Invalid JSON: {e}. Response: {response}"),
    })
}

/// Extracts JSON from an engine response, handling markdown code blocks.
fn extract_json_from_response(response: &str) -> &str {
    let trimmed = response.trim();

    // Handle ```json ... ``` blocks
    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            return trimmed[json_start..json_start + end].trim();
        }
    }

    // Handle ``` ... ``` blocks (without json marker)
    if let Some(start) = trimmed.find("```") {
        let content_start = start + 3;
        let after_marker = &trimmed[content_start..];
        let json_start = after_marker
            .find('{')
            .map_or(content_start, |pos| content_start + pos);
        if let Some(end) = trimmed[json_start..].find("```") {
            return trimmed[json_start..json_start + end].trim();
        }
    }

    // Handle raw JSON (find first { to last })
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            return &trimmed[start..=end];
        }
    }

    trimmed
}
