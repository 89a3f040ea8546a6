//! Scoring function for agent/ticket fit

use crate::dataset::Agent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Weights for scoring agent candidates.
///
/// The defaults reproduce the canonical heuristic: matched proficiency
/// counts triple, the agent's declared load costs double, and the live load
/// tracked during the run costs single at the selection site. Change these
/// only if you want a different balance between skill fit and load spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Multiplier on each matched skill's proficiency level
    pub proficiency: f64,

    /// Multiplier on the agent's declared `current_load` input field
    pub load_penalty: f64,

    /// Multiplier on the live tracked load, applied by the dispatcher
    /// on top of the base score
    pub rebalance_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            proficiency: 3.0,
            load_penalty: 2.0,
            rebalance_penalty: 1.0,
        }
    }
}

/// Score one agent against one ticket's tag set.
///
/// Returns the base score and the matched tags in lexicographic order.
/// Matching is exact-string only; `Reset` does not match `Resets`.
///
/// The load term here reads the agent's *declared* load from the input
/// document. The dispatcher separately subtracts the live tracked load,
/// so an agent's load at call time is penalized twice with different
/// weights. That doubling is part of the heuristic's observable behavior
/// and is kept as-is.
pub fn score_agent(
    agent: &Agent,
    ticket_tags: &BTreeSet<String>,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut matched = Vec::new();

    for tag in ticket_tags {
        if let Some(level) = agent.skills.get(tag) {
            score += level * weights.proficiency;
            matched.push(tag.clone());
        }
    }

    score += agent.experience_level;
    score -= agent.current_load as f64 * weights.load_penalty;

    (score, matched)
}
