//! Document Generator Port - will preview generation interface.
//!
//! This port defines the contract for turning a `WillDraft` into a readable
//! educational document. Adapters (like MarkdownDraftGenerator) provide the
//! implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::draft::WillDraft;

/// Port for generating preview documents from draft form input.
///
/// # Contract
///
/// Implementations must:
/// - Accept any draft, substituting placeholders for blank fields
/// - Include optional sections only when their field is filled in
/// - Be deterministic for a given draft and options
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn DocumentGenerator = &MarkdownDraftGenerator::new();
/// let document = generator.generate(&draft, &GenerationOptions::dated(today))?;
/// ```
pub trait DocumentGenerator: Send + Sync {
    /// Generate the full preview document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` only if writing the output itself fails.
    fn generate(&self, draft: &WillDraft, options: &GenerationOptions)
        -> Result<String, DocumentError>;
}

/// Options for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Date printed in the document header.
    pub date: NaiveDate,

    /// Province or state named in the header and execution section.
    pub jurisdiction: String,

    /// Include the signature lines and educational footer.
    pub include_signature_block: bool,
}

impl GenerationOptions {
    /// Full document dated `date`.
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date,
            jurisdiction: "Ontario".to_string(),
            include_signature_block: true,
        }
    }

    /// Body only, without signature lines or footer.
    pub fn body_only(date: NaiveDate) -> Self {
        Self {
            include_signature_block: false,
            ..Self::dated(date)
        }
    }
}

/// Errors that can occur during document generation.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// Template rendering failed.
    #[error("Template rendering failed: {0}")]
    TemplateError(String),

    /// Internal generation error.
    #[error("Generation failed: {0}")]
    Internal(String),
}

impl DocumentError {
    /// Creates a template error.
    pub fn template(message: impl Into<String>) -> Self {
        Self::TemplateError(message.into())
    }
}

impl From<std::fmt::Error> for DocumentError {
    fn from(_: std::fmt::Error) -> Self {
        Self::template("formatter error while writing document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn dated_options_include_everything() {
        let opts = GenerationOptions::dated(day());
        assert_eq!(opts.jurisdiction, "Ontario");
        assert!(opts.include_signature_block);
    }

    #[test]
    fn body_only_drops_signature_block() {
        let opts = GenerationOptions::body_only(day());
        assert!(!opts.include_signature_block);
        assert_eq!(opts.date, day());
    }

    #[test]
    fn fmt_error_becomes_template_error() {
        let err: DocumentError = std::fmt::Error.into();
        assert!(matches!(err, DocumentError::TemplateError(_)));
    }
}
