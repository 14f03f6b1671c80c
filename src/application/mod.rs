//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers take a command or query struct and return plain results; callers
//! pick the adapters.

pub mod handlers;

pub use handlers::{
    // Questionnaire handlers
    EvaluateAnswersHandler, EvaluateAnswersQuery, EvaluationReport,
    InterviewError, InterviewOutcome, RunInterviewCommand, RunInterviewHandler,
    // Resource handlers
    RenderDraftCommand, RenderDraftHandler,
    SearchVaultHandler, SearchVaultQuery, SearchVaultResult,
    ShowWalkthroughHandler, ShowWalkthroughQuery, WalkthroughView,
};
