//! Strategy plan builder service.

use crate::engine::GenerativeEngine;
use crate::models::StrategyPlan;
use crate::{Error, Result};

/// Service for building execution plans.
///
/// Tier gating happens at the caller; by the time this service runs, access
/// has already been granted. Engine failures surface as-is: the view shows a
/// generic "no plan available" state and no partial plan is kept.
pub struct StrategistService<E> {
    /// Plan-builder collaborator.
    engine: E,
}

impl<E: GenerativeEngine> StrategistService<E> {
    /// Creates a new strategist service over the given engine.
    #[must_use]
    pub const fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Builds an execution plan for the goal under the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty goal, and propagates
    /// engine failures untouched.
    pub fn build_plan(&self, goal: &str, context: &str) -> Result<StrategyPlan> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(Error::InvalidInput("Goal cannot be empty".to_string()));
        }

        self.engine.develop_strategy(goal, context.trim())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::Classification;
    use crate::models::{
        CategoryMode, ImageResolution, ReasoningStep, VideoArtifact, VisualArtifact,
    };

    struct PlanEngine {
        plan: Option<StrategyPlan>,
    }

    impl GenerativeEngine for PlanEngine {
        fn name(&self) -> &'static str {
            "plan"
        }

        fn classify_capture(&self, _text: &str, _mode: CategoryMode) -> Result<Classification> {
            Ok(Classification::default())
        }

        fn develop_strategy(&self, _goal: &str, _context: &str) -> Result<StrategyPlan> {
            self.plan.clone().ok_or_else(|| Error::OperationFailed {
                operation: "strategy".to_string(),
                cause: "engine down".to_string(),
            })
        }

        fn generate_visual(
            &self,
            _prompt: &str,
            _resolution: ImageResolution,
        ) -> Result<VisualArtifact> {
            Err(Error::OperationFailed {
                operation: "visual".to_string(),
                cause: "not scripted".to_string(),
            })
        }

        fn edit_visual(
            &self,
            _artifact: &VisualArtifact,
            _instruction: &str,
        ) -> Result<VisualArtifact> {
            Err(Error::OperationFailed {
                operation: "visual".to_string(),
                cause: "not scripted".to_string(),
            })
        }

        fn simulate_video(&self, _prompt: &str) -> Result<VideoArtifact> {
            Err(Error::OperationFailed {
                operation: "video".to_string(),
                cause: "not scripted".to_string(),
            })
        }
    }

    fn sample_plan() -> StrategyPlan {
        StrategyPlan {
            goal_summary: "Ship the beta".to_string(),
            reasoning_steps: vec![ReasoningStep {
                thought: "Scope first".to_string(),
                action: "Freeze the feature list".to_string(),
            }],
            final_strategy: "Cut scope, ship weekly".to_string(),
            potential_risks: vec!["Scope creep".to_string()],
        }
    }

    #[test]
    fn test_builds_plan() {
        let service = StrategistService::new(PlanEngine {
            plan: Some(sample_plan()),
        });
        let plan = service.build_plan("ship the beta", "two engineers").unwrap();
        assert_eq!(plan.final_strategy, "Cut scope, ship weekly");
    }

    #[test]
    fn test_empty_goal_rejected_before_engine() {
        let service = StrategistService::new(PlanEngine { plan: None });
        assert!(matches!(
            service.build_plan("  ", "context"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_engine_failure_surfaces() {
        let service = StrategistService::new(PlanEngine { plan: None });
        assert!(matches!(
            service.build_plan("goal", ""),
            Err(Error::OperationFailed { .. })
        ));
    }
}
