//! RecommendationResult - output of a single engine evaluation.

use serde::Serialize;

use super::{ClauseSet, RiskTier};

/// Score, tier, clauses, and cautions computed from one AnswerSet.
///
/// Built fresh on every evaluation and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub score: u32,
    pub tier: RiskTier,
    pub must_clauses: ClauseSet,
    pub should_clauses: ClauseSet,
    pub cautions: Vec<&'static str>,
}

impl RecommendationResult {
    /// True when there is at least one "should" clause to show.
    pub fn has_recommendations(&self) -> bool {
        !self.should_clauses.is_empty()
    }

    pub fn has_cautions(&self) -> bool {
        !self.cautions.is_empty()
    }
}
