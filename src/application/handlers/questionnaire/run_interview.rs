//! RunInterviewHandler - drives the questionnaire through a console.
//!
//! Owns the interaction loop: render the current question, read a command,
//! apply it to the `QuestionnaireFlow`, and show results on completion.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{AnswerSet, FlowAction, Question, QuestionnaireFlow};
use crate::domain::recommendation::RecommendationResult;
use crate::ports::{ConsoleError, InterviewCommand, InterviewConsole, PromptStage, QuestionView};

pub const PICK_AN_OPTION: &str = "Pick an option to continue.";
pub const RESULTS_HELP: &str = "Type r to restart, b to go back, or q to quit.";

/// Command to run one interactive questionnaire session.
#[derive(Debug, Clone)]
pub struct RunInterviewCommand {
    pub session_id: SessionId,
    pub flow: QuestionnaireFlow,
}

impl RunInterviewCommand {
    /// A fresh session over the reference questionnaire.
    pub fn standard() -> Self {
        Self {
            session_id: SessionId::new(),
            flow: QuestionnaireFlow::standard(),
        }
    }
}

/// How the session ended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewOutcome {
    pub session_id: SessionId,
    /// Answers at the moment the user quit.
    pub answers: AnswerSet,
    /// The result on screen when the user quit, if any.
    pub result: Option<RecommendationResult>,
}

/// Errors that end an interview early.
#[derive(Debug, Error)]
pub enum InterviewError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for interactive questionnaire sessions.
pub struct RunInterviewHandler<C: InterviewConsole> {
    console: C,
}

impl<C: InterviewConsole> RunInterviewHandler<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Returns the console, e.g. to inspect captured output.
    pub fn into_console(self) -> C {
        self.console
    }

    pub fn handle(&mut self, cmd: RunInterviewCommand) -> Result<InterviewOutcome, InterviewError> {
        let RunInterviewCommand { session_id, mut flow } = cmd;
        let span = info_span!("interview", session_id = %session_id);
        let _guard = span.enter();
        info!(questions = flow.len(), "Interview started");

        let mut showing: Option<RecommendationResult> = None;

        loop {
            if let Some(result) = &showing {
                match self.console.read_command(PromptStage::Results)? {
                    InterviewCommand::Quit => {
                        info!(score = result.score, tier = result.tier.label(), "Interview finished");
                        return Ok(InterviewOutcome {
                            session_id,
                            answers: flow.answers().clone(),
                            result: showing,
                        });
                    }
                    InterviewCommand::Restart | InterviewCommand::Continue => {
                        flow.restart();
                        showing = None;
                    }
                    // Steps back from the last question, like Back on any question.
                    InterviewCommand::Back => {
                        flow.retreat();
                        showing = None;
                    }
                    InterviewCommand::Choose(_) => self.console.show_notice(RESULTS_HELP)?,
                }
                continue;
            }

            let choice = {
                let question = flow.current()?;
                let view = QuestionView {
                    question,
                    step: flow.index() + 1,
                    total: flow.len(),
                    progress: flow.progress(),
                    selected: flow.selected_value(),
                    can_go_back: !flow.is_first(),
                    is_last: flow.is_last(),
                };
                self.console.show_question(&view)?;

                match self.console.read_command(PromptStage::Question)? {
                    InterviewCommand::Quit => {
                        info!(answered = flow.answers().answered_count(), "Interview abandoned");
                        return Ok(InterviewOutcome {
                            session_id,
                            answers: flow.answers().clone(),
                            result: None,
                        });
                    }
                    InterviewCommand::Back => {
                        flow.retreat();
                        continue;
                    }
                    InterviewCommand::Restart => {
                        flow.restart();
                        continue;
                    }
                    InterviewCommand::Continue => None,
                    InterviewCommand::Choose(input) => Some(resolve_choice(question, &input)),
                }
            };

            if let Some(value) = choice {
                if !flow.select_answer(&value) {
                    self.console.show_notice(PICK_AN_OPTION)?;
                    continue;
                }
            }

            match flow.advance() {
                FlowAction::NeedsSelection => self.console.show_notice(PICK_AN_OPTION)?,
                FlowAction::NextQuestion => {}
                FlowAction::Complete => {
                    let result = flow.evaluate();
                    self.console.show_result(&result)?;
                    showing = Some(result);
                }
            }
        }
    }
}

/// Maps raw input to a choice value: a 1-based number, a value, or a label.
///
/// Unmatched input is returned unchanged so the flow can reject it.
pub fn resolve_choice(question: &Question, input: &str) -> String {
    if let Ok(number) = input.parse::<usize>() {
        if let Some(choice) = question.choice_by_number(number) {
            return choice.value.clone();
        }
    }
    question
        .choices
        .iter()
        .find(|c| c.value.eq_ignore_ascii_case(input) || c.label.eq_ignore_ascii_case(input))
        .map(|c| c.value.clone())
        .unwrap_or_else(|| input.to_string())
}
