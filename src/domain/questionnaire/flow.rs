//! QuestionnaireFlow - cursor over the ordered questions.
//!
//! Owns the answers for one session. The presentation layer calls
//! `select_answer` for the visible question and `advance`/`retreat` to move.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{standard_questions, AnswerSet, Question};
use crate::domain::foundation::{DomainError, Percentage, ValidationError};
use crate::domain::recommendation::{RecommendationEngine, RecommendationResult};

/// Outcome of trying to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// The current question has no answer yet; re-prompt.
    NeedsSelection,
    /// The cursor moved to the next question.
    NextQuestion,
    /// The last question is answered; evaluate and show results.
    Complete,
}

/// Questionnaire state for a single session.
#[derive(Debug, Clone)]
pub struct QuestionnaireFlow {
    questions: Vec<Question>,
    index: usize,
    answers: AnswerSet,
}

impl QuestionnaireFlow {
    /// Creates a flow over `questions`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if there are no questions
    /// - `DuplicateKey` if two questions share a key
    /// - `UnknownChoice` if a choice value cannot be stored for its key
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.key) {
                return Err(ValidationError::duplicate_key(question.key.as_str()));
            }
            if let Some(bad) = question
                .choices
                .iter()
                .find(|c| !AnswerSet::accepts(question.key, &c.value))
            {
                return Err(ValidationError::unknown_choice(
                    question.key.as_str(),
                    bad.value.clone(),
                ));
            }
        }

        Ok(Self {
            questions,
            index: 0,
            answers: AnswerSet::new(),
        })
    }

    /// Creates a flow over the reference questionnaire.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions().to_vec(),
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Returns the question under the cursor.
    pub fn current(&self) -> Result<&Question, DomainError> {
        self.questions
            .get(self.index)
            .ok_or_else(|| DomainError::question_out_of_range(self.index, self.questions.len()))
    }

    /// Records `value` for the current question.
    ///
    /// Returns false, leaving the answers untouched, when `value` is empty or
    /// is not one of the current question's choices.
    pub fn select_answer(&mut self, value: &str) -> bool {
        if value.trim().is_empty() {
            return false;
        }
        let Ok(question) = self.current() else {
            return false;
        };
        let key = question.key;
        if !question.has_choice(value) {
            warn!(key = %key, value, "Rejected answer that is not a listed choice");
            return false;
        }

        match self.answers.record(key, value) {
            Ok(()) => {
                debug!(key = %key, value, "Answer recorded");
                true
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Answer could not be recorded");
                false
            }
        }
    }

    /// Moves forward if the current question is answered.
    pub fn advance(&mut self) -> FlowAction {
        let Ok(question) = self.current() else {
            return FlowAction::NeedsSelection;
        };
        if !self.answers.is_answered(question.key) {
            return FlowAction::NeedsSelection;
        }
        if self.is_last() {
            debug!(answered = self.answers.answered_count(), "Questionnaire complete");
            return FlowAction::Complete;
        }

        self.index += 1;
        debug!(index = self.index, "Advanced to next question");
        FlowAction::NextQuestion
    }

    /// Moves back one question; no-op on the first question.
    pub fn retreat(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            debug!(index = self.index, "Returned to previous question");
        }
    }

    /// Returns to the first question and forgets every answer.
    pub fn restart(&mut self) {
        self.index = 0;
        self.answers.clear();
        debug!("Questionnaire restarted");
    }

    /// Runs the recommendation engine over the answers so far.
    pub fn evaluate(&self) -> RecommendationResult {
        RecommendationEngine::evaluate(&self.answers)
    }

    /// Position-based progress: `index / (len - 1)`.
    ///
    /// Reaches 100% while the last question is shown, before it is answered.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.index, self.questions.len().saturating_sub(1))
    }

    /// 1-based position, e.g. "3 / 10".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.questions.len())
    }

    /// The answer already recorded for the current question, if any.
    pub fn selected_value(&self) -> Option<&'static str> {
        self.current()
            .ok()
            .and_then(|q| self.answers.value(q.key))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Default for QuestionnaireFlow {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::questionnaire::QuestionKey;
    use crate::domain::recommendation::RiskTier;

    fn answer_current(flow: &mut QuestionnaireFlow, value: &str) -> FlowAction {
        assert!(flow.select_answer(value), "select_answer({}) was rejected", value);
        flow.advance()
    }

    fn two_question_flow() -> QuestionnaireFlow {
        QuestionnaireFlow::new(vec![
            Question::new(QuestionKey::Pets, "Pets?", "").with_choice("yes", "Yes").with_choice("no", "No"),
            Question::new(QuestionKey::Poa, "POA?", "").with_choice("yes", "Yes").with_choice("no", "No"),
        ])
        .unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // construction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn standard_flow_starts_at_first_question() {
        let flow = QuestionnaireFlow::standard();
        assert_eq!(flow.len(), 10);
        assert_eq!(flow.index(), 0);
        assert_eq!(flow.current().unwrap().key, QuestionKey::Age18);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn new_rejects_empty_question_list() {
        assert!(matches!(
            QuestionnaireFlow::new(vec![]),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn new_rejects_duplicate_keys() {
        let q = Question::new(QuestionKey::Pets, "Pets?", "").with_choice("yes", "Yes");
        assert!(matches!(
            QuestionnaireFlow::new(vec![q.clone(), q]),
            Err(ValidationError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn new_rejects_choices_the_key_cannot_store() {
        let q = Question::new(QuestionKey::Pets, "Pets?", "").with_choice("several", "Several");
        assert!(matches!(
            QuestionnaireFlow::new(vec![q]),
            Err(ValidationError::UnknownChoice { .. })
        ));
    }

    // ───────────────────────────────────────────────────────────────
    // select_answer / advance
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn advance_without_selection_needs_selection_and_keeps_index() {
        let mut flow = QuestionnaireFlow::standard();
        assert_eq!(flow.advance(), FlowAction::NeedsSelection);
        assert_eq!(flow.index(), 0);
    }

    #[test]
    fn select_answer_rejects_empty_value() {
        let mut flow = QuestionnaireFlow::standard();
        assert!(!flow.select_answer(""));
        assert!(!flow.select_answer("   "));
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn select_answer_rejects_value_not_offered() {
        let mut flow = QuestionnaireFlow::standard();
        assert!(!flow.select_answer("married"));
        assert!(flow.selected_value().is_none());
    }

    #[test]
    fn advance_after_selection_moves_to_next_question() {
        let mut flow = QuestionnaireFlow::standard();
        assert_eq!(answer_current(&mut flow, "yes"), FlowAction::NextQuestion);
        assert_eq!(flow.index(), 1);
        assert_eq!(flow.current().unwrap().key, QuestionKey::Capacity);
    }

    #[test]
    fn needs_selection_keeps_earlier_answers() {
        let mut flow = QuestionnaireFlow::standard();
        answer_current(&mut flow, "yes");
        assert_eq!(flow.advance(), FlowAction::NeedsSelection);
        assert_eq!(flow.answers().value(QuestionKey::Age18), Some("yes"));
    }

    #[test]
    fn answering_last_question_completes() {
        let mut flow = two_question_flow();
        assert_eq!(answer_current(&mut flow, "no"), FlowAction::NextQuestion);
        assert_eq!(answer_current(&mut flow, "yes"), FlowAction::Complete);
        assert_eq!(flow.index(), 1);
        // Completing again is stable.
        assert_eq!(flow.advance(), FlowAction::Complete);
    }

    #[test]
    fn full_standard_run_completes_after_ten_answers() {
        let mut flow = QuestionnaireFlow::standard();
        let values = ["yes", "yes", "single", "no", "no", "no", "no", "no", "no"];
        for value in values {
            assert_eq!(answer_current(&mut flow, value), FlowAction::NextQuestion);
        }
        assert_eq!(answer_current(&mut flow, "yes"), FlowAction::Complete);

        let result = flow.evaluate();
        assert_eq!(result.score, 0);
        assert_eq!(result.tier, RiskTier::Low);
    }

    // ───────────────────────────────────────────────────────────────
    // retreat / restart
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn retreat_at_first_question_is_noop() {
        let mut flow = QuestionnaireFlow::standard();
        flow.retreat();
        assert_eq!(flow.index(), 0);
    }

    #[test]
    fn retreat_shows_previous_answer() {
        let mut flow = QuestionnaireFlow::standard();
        answer_current(&mut flow, "no");
        flow.retreat();
        assert_eq!(flow.index(), 0);
        assert_eq!(flow.selected_value(), Some("no"));
    }

    #[test]
    fn restart_after_complete_resets_everything() {
        let mut flow = two_question_flow();
        answer_current(&mut flow, "yes");
        assert_eq!(answer_current(&mut flow, "yes"), FlowAction::Complete);

        flow.restart();
        assert_eq!(flow.index(), 0);
        assert!(flow.answers().is_empty());
        assert_eq!(flow.advance(), FlowAction::NeedsSelection);
    }

    // ───────────────────────────────────────────────────────────────
    // progress
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn progress_is_position_based() {
        let mut flow = QuestionnaireFlow::standard();
        assert_eq!(flow.progress(), Percentage::ZERO);

        answer_current(&mut flow, "yes");
        assert_eq!(flow.progress().value(), 11);

        while !flow.is_last() {
            let value = flow.current().unwrap().choices[0].value.clone();
            answer_current(&mut flow, &value);
        }
        // Last question shown but not yet answered.
        assert_eq!(flow.progress(), Percentage::HUNDRED);
        assert!(flow.selected_value().is_none());
    }

    #[test]
    fn position_label_is_one_based() {
        let mut flow = QuestionnaireFlow::standard();
        assert_eq!(flow.position_label(), "1 / 10");
        answer_current(&mut flow, "yes");
        assert_eq!(flow.position_label(), "2 / 10");
    }

    #[test]
    fn single_question_flow_reports_full_progress() {
        let flow = QuestionnaireFlow::new(vec![
            Question::new(QuestionKey::Pets, "Pets?", "").with_choice("yes", "Yes"),
        ])
        .unwrap();
        assert_eq!(flow.progress(), Percentage::HUNDRED);
        assert!(flow.is_first() && flow.is_last());
    }

    #[test]
    fn current_reports_out_of_range() {
        let mut flow = two_question_flow();
        flow.index = 5;
        let err = flow.current().unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionOutOfRange);
    }
}
