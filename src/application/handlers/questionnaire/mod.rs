//! Questionnaire command and query handlers.

mod evaluate_answers;
mod run_interview;

pub use evaluate_answers::{EvaluateAnswersHandler, EvaluateAnswersQuery, EvaluationReport};
pub use run_interview::{
    resolve_choice, InterviewError, InterviewOutcome, RunInterviewCommand, RunInterviewHandler,
    PICK_AN_OPTION, RESULTS_HELP,
};
