//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentGenerator` - renders a will draft into a preview document
//! - `InterviewConsole` - presentation layer for the questionnaire

mod document_generator;
mod interview_console;

pub use document_generator::{DocumentError, DocumentGenerator, GenerationOptions};
pub use interview_console::{
    ConsoleError, InterviewCommand, InterviewConsole, PromptStage, QuestionView,
};
