//! Questionnaire module - questions, typed answers, and the flow controller.

mod answers;
mod flow;
mod question;

pub use answers::{AnswerSet, MaritalStatus, YesNo};
pub use flow::{FlowAction, QuestionnaireFlow};
pub use question::{standard_questions, Choice, Question, QuestionKey};
