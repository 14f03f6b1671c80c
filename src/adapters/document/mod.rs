//! Document adapters - Implementations for will preview generation.
//!
//! - `MarkdownDraftGenerator` - Renders a `WillDraft` as a markdown document

mod markdown_generator;

pub use markdown_generator::{MarkdownDraftGenerator, DOCUMENT_TITLE, EDUCATIONAL_FOOTER};
