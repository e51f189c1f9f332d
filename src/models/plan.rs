//! Strategy plan types produced by the plan-builder collaborator.

use serde::{Deserialize, Serialize};

/// One step in a plan's reasoning chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningStep {
    /// Why this step exists.
    pub thought: String,
    /// What to do.
    pub action: String,
}

/// A complete execution plan for an operator goal.
///
/// Produced whole or not at all: plan-builder failures surface as a generic
/// failure state and no partial plan is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    /// Condensed restatement of the goal.
    pub goal_summary: String,
    /// Ordered reasoning chain.
    pub reasoning_steps: Vec<ReasoningStep>,
    /// The single core directive distilled from the chain.
    pub final_strategy: String,
    /// Known ways the plan can degrade.
    pub potential_risks: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_collaborator_shape() {
        let json = r#"{
            "goalSummary": "Ship the beta",
            "reasoningSteps": [
                {"thought": "Scope first", "action": "Freeze the feature list"}
            ],
            "finalStrategy": "Cut scope, ship weekly",
            "potentialRisks": ["Scope creep"]
        }"#;

        let plan: StrategyPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.goal_summary, "Ship the beta");
        assert_eq!(plan.reasoning_steps.len(), 1);
        assert_eq!(plan.reasoning_steps[0].action, "Freeze the feature list");
        assert_eq!(plan.potential_risks, vec!["Scope creep".to_string()]);
    }
}
