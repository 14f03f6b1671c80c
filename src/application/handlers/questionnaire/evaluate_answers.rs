//! EvaluateAnswersHandler - Query handler for scoring a saved AnswerSet.
//!
//! Used when answers come from a file rather than an interactive session.
//! Partially answered sets are scored as-is; unanswered questions are listed.

use serde::Serialize;
use tracing::info;

use crate::domain::questionnaire::{AnswerSet, QuestionKey};
use crate::domain::recommendation::{RecommendationEngine, RecommendationResult};

/// Query to evaluate a set of answers.
#[derive(Debug, Clone)]
pub struct EvaluateAnswersQuery {
    pub answers: AnswerSet,
}

/// Result of evaluating answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub answered: usize,
    /// Questions with no answer, in questionnaire order.
    pub unanswered: Vec<QuestionKey>,
    pub result: RecommendationResult,
}

impl EvaluationReport {
    pub fn is_complete(&self) -> bool {
        self.unanswered.is_empty()
    }
}

/// Handler for evaluating answers outside the interactive flow.
#[derive(Debug, Default)]
pub struct EvaluateAnswersHandler;

impl EvaluateAnswersHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: EvaluateAnswersQuery) -> EvaluationReport {
        let answers = query.answers;
        let unanswered: Vec<QuestionKey> = QuestionKey::ALL
            .iter()
            .copied()
            .filter(|key| !answers.is_answered(*key))
            .collect();
        let result = RecommendationEngine::evaluate(&answers);

        info!(
            answered = answers.answered_count(),
            unanswered = unanswered.len(),
            score = result.score,
            tier = result.tier.label(),
            "Answers evaluated"
        );

        EvaluationReport {
            answered: answers.answered_count(),
            unanswered,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RiskTier;

    fn evaluate(pairs: &[(&str, &str)]) -> EvaluationReport {
        let answers = AnswerSet::from_pairs(pairs).unwrap();
        EvaluateAnswersHandler::new().handle(EvaluateAnswersQuery { answers })
    }

    #[test]
    fn empty_answers_list_every_question() {
        let report = evaluate(&[]);
        assert_eq!(report.answered, 0);
        assert_eq!(report.unanswered, QuestionKey::ALL.to_vec());
        assert_eq!(report.result.score, 9);
        assert_eq!(report.result.tier, RiskTier::High);
        assert!(!report.is_complete());
    }

    #[test]
    fn complete_low_risk_answers() {
        let report = evaluate(&[
            ("age18", "yes"),
            ("capacity", "yes"),
            ("married", "single"),
            ("children", "no"),
            ("property", "no"),
            ("specificGifts", "no"),
            ("pets", "no"),
            ("business", "no"),
            ("poa", "no"),
            ("storage", "yes"),
        ]);
        assert!(report.is_complete());
        assert_eq!(report.answered, 10);
        assert_eq!(report.result.tier, RiskTier::Low);
    }

    #[test]
    fn partial_answers_keep_questionnaire_order() {
        let report = evaluate(&[("pets", "yes"), ("age18", "yes")]);
        assert_eq!(report.answered, 2);
        assert_eq!(report.unanswered.first(), Some(&QuestionKey::Capacity));
        assert!(!report.unanswered.contains(&QuestionKey::Pets));
    }

    #[test]
    fn report_serializes_camel_case() {
        let json = serde_json::to_value(evaluate(&[])).unwrap();
        assert_eq!(json["answered"], 0);
        assert_eq!(json["unanswered"][5], "specificGifts");
        assert_eq!(json["result"]["score"], 9);
    }
}
