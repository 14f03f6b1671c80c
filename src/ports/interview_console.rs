//! Interview Console Port - presentation layer for the questionnaire.
//!
//! The application layer drives a `QuestionnaireFlow` and uses this port to
//! show questions and results and to read what the user wants to do next.

use thiserror::Error;

use crate::domain::foundation::Percentage;
use crate::domain::questionnaire::Question;
use crate::domain::recommendation::RecommendationResult;

/// What the console is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStage {
    /// A question is on screen.
    Question,
    /// The results view is on screen.
    Results,
}

/// A user instruction read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewCommand {
    /// Raw choice input: a choice number or value.
    Choose(String),
    /// Move on with whatever is already selected.
    Continue,
    Back,
    Restart,
    Quit,
}

/// Everything needed to render one question.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    /// 1-based position.
    pub step: usize,
    pub total: usize,
    pub progress: Percentage,
    /// Value already recorded for this question.
    pub selected: Option<&'a str>,
    pub can_go_back: bool,
    pub is_last: bool,
}

/// Port for interactive questionnaire I/O.
pub trait InterviewConsole {
    fn show_question(&mut self, view: &QuestionView<'_>) -> Result<(), ConsoleError>;

    /// Shows a short message such as a re-prompt.
    fn show_notice(&mut self, message: &str) -> Result<(), ConsoleError>;

    fn show_result(&mut self, result: &RecommendationResult) -> Result<(), ConsoleError>;

    /// Blocks until the user enters a command. End of input reads as `Quit`.
    fn read_command(&mut self, stage: PromptStage) -> Result<InterviewCommand, ConsoleError>;
}

/// Errors raised by console adapters.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
