//! Visual generation service.

use crate::engine::GenerativeEngine;
use crate::models::{ImageResolution, VideoArtifact, VisualArtifact};
use crate::{Error, Result};

/// Service for generating and refining visuals.
///
/// Resolution and video gating happen at the caller. Failures keep their
/// taxonomy: [`Error::Unauthorized`] prompts re-authorization, everything
/// else prompts a retry.
pub struct VisualizerService<E> {
    /// Visual generation collaborator.
    engine: E,
}

impl<E: GenerativeEngine> VisualizerService<E> {
    /// Creates a new visualizer service over the given engine.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Generates an image for the prompt at the requested resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty prompt, and propagates
    /// engine failures untouched.
    pub fn generate(&self, prompt: &str, resolution: ImageResolution) -> Result<VisualArtifact> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(Error::InvalidInput("Prompt cannot be empty".to_string()));
        }

        self.engine.generate_visual(prompt, resolution)
    }

    /// Refines an existing image with an edit instruction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty instruction, and
    /// propagates engine failures untouched.
    pub fn refine(&self, artifact: &VisualArtifact, instruction: &str) -> Result<VisualArtifact> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(Error::InvalidInput(
                "Refinement instruction cannot be empty".to_string(),
            ));
        }

        self.engine.edit_visual(artifact, instruction)
    }

    /// Synthesizes a motion simulation for the prompt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty prompt, and propagates
    /// engine failures untouched.
    pub fn simulate(&self, prompt: &str) -> Result<VideoArtifact> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(Error::InvalidInput("Prompt cannot be empty".to_string()));
        }

        self.engine.simulate_video(prompt)
    }
}
