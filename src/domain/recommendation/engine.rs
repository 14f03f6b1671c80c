//! Recommendation Engine - maps answers to clauses, score, and tier.

use tracing::debug;

use super::rules::{RecommendationRule, RULES};
use super::{ClauseSet, RecommendationResult, RiskTier};
use crate::domain::questionnaire::AnswerSet;

/// Evaluates the fixed rule table against an AnswerSet.
///
/// Pure and total: any subset of answered questions, including none, yields
/// a result. Unanswered questions never equal an expected choice.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Evaluates the standard rule table.
    pub fn evaluate(answers: &AnswerSet) -> RecommendationResult {
        Self::evaluate_with(&RULES, answers)
    }

    /// Evaluates `rules` in order.
    pub fn evaluate_with(rules: &[RecommendationRule], answers: &AnswerSet) -> RecommendationResult {
        let mut score = 0;
        let mut must_clauses = ClauseSet::new();
        let mut should_clauses = ClauseSet::new();
        let mut cautions = Vec::new();

        for rule in rules.iter().filter(|r| (r.applies)(answers)) {
            debug!(rule = rule.id, delta = rule.score_delta, "Rule applied");
            score += rule.score_delta;
            for clause in rule.must {
                must_clauses.insert_if_absent(*clause);
            }
            for clause in rule.should {
                should_clauses.insert_if_absent(*clause);
            }
            cautions.extend_from_slice(rule.cautions);
        }

        let tier = RiskTier::from_score(score);
        debug!(score, tier = tier.label(), "Evaluation finished");

        RecommendationResult {
            score,
            tier,
            must_clauses,
            should_clauses,
            cautions,
        }
    }

    /// Highest score the standard rules can produce.
    pub fn max_score() -> u32 {
        // Married and common-law are exclusive; only the larger counts.
        let exclusive_marital = RULES
            .iter()
            .filter(|r| r.id == "married")
            .map(|r| r.score_delta)
            .sum::<u32>();
        RULES.iter().map(|r| r.score_delta).sum::<u32>() - exclusive_marital
    }
}
