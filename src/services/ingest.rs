//! Capture ingestion service.
//!
//! Turns free-form operator text into a fully-populated [`CapturedItem`].
//! Classification is best-effort: every engine failure degrades to a plain
//! note carrying the raw input, so ingestion never loses what the operator
//! typed. Only empty input is rejected, and the UI never submits that.

use crate::engine::{Classification, GenerativeEngine};
use crate::models::{CapturedItem, CategoryMode, ItemId};
use crate::{Error, Result, current_timestamp};

/// Service for ingesting captures.
///
/// Stateless: one ingestion is in flight per submission because callers
/// invoke it synchronously; nothing else blocks on it.
pub struct IngestionService<E> {
    /// Classifier collaborator.
    engine: E,
}

impl<E: GenerativeEngine> IngestionService<E> {
    /// Creates a new ingestion service over the given engine.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Ingests one capture under the active mode.
    ///
    /// The resulting item's `category` is always the mode active at call
    /// time, regardless of what the classifier returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is empty after trimming.
    /// Classifier failures are recovered here and never surface.
    pub fn ingest(&self, text: &str, mode: CategoryMode) -> Result<CapturedItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("Capture text cannot be empty".to_string()));
        }

        let classification = match self.engine.classify_capture(text, mode) {
            Ok(classification) => classification,
            Err(e) => {
                tracing::warn!(error = %e, "Classifier unavailable, degrading capture to note");
                Classification::default()
            },
        };

        Ok(Self::normalize(classification, text, mode))
    }

    /// Normalizes a possibly-partial classification into a complete item.
    fn normalize(classification: Classification, raw: &str, mode: CategoryMode) -> CapturedItem {
        let kind = classification.kind.unwrap_or_default();
        let content = classification
            .content
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| raw.to_string());

        CapturedItem {
            id: ItemId::generate(kind),
            kind,
            content,
            created_at: current_timestamp(),
            category: mode,
            metadata: classification.metadata,
        }
    }
}
