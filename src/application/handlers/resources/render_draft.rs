//! RenderDraftHandler - Command handler for the will preview document.
//!
//! Produces text without side effects; the caller decides where it goes.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::draft::WillDraft;
use crate::ports::{DocumentError, DocumentGenerator, GenerationOptions};

/// Command to render a preview of a draft.
#[derive(Debug, Clone)]
pub struct RenderDraftCommand {
    pub draft: WillDraft,
    pub options: GenerationOptions,
}

impl RenderDraftCommand {
    /// Full document dated `date`.
    pub fn dated(draft: WillDraft, date: NaiveDate) -> Self {
        Self {
            draft,
            options: GenerationOptions::dated(date),
        }
    }
}

/// Handler for rendering draft previews.
pub struct RenderDraftHandler {
    generator: Arc<dyn DocumentGenerator>,
}

impl RenderDraftHandler {
    pub fn new(generator: Arc<dyn DocumentGenerator>) -> Self {
        Self { generator }
    }

    pub fn handle(&self, cmd: RenderDraftCommand) -> Result<String, DocumentError> {
        let document = self.generator.generate(&cmd.draft, &cmd.options)?;
        info!(
            date = %cmd.options.date,
            beneficiaries = cmd.draft.beneficiary_list().len(),
            bytes = document.len(),
            "Draft preview rendered"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct RecordingGenerator {
        seen: Mutex<Vec<(String, NaiveDate)>>,
        fail: bool,
    }

    impl DocumentGenerator for RecordingGenerator {
        fn generate(
            &self,
            draft: &WillDraft,
            options: &GenerationOptions,
        ) -> Result<String, DocumentError> {
            if self.fail {
                return Err(DocumentError::Internal("generator offline".to_string()));
            }
            self.seen
                .lock()
                .unwrap()
                .push((draft.testator_name.clone(), options.date));
            Ok(format!("will of {}", draft.testator_name))
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn passes_draft_and_date_to_generator() {
        let generator = Arc::new(RecordingGenerator::default());
        let handler = RenderDraftHandler::new(generator.clone());
        let draft = WillDraft {
            testator_name: "Ada Lovelace".to_string(),
            ..Default::default()
        };

        let document = handler.handle(RenderDraftCommand::dated(draft, date())).unwrap();

        assert_eq!(document, "will of Ada Lovelace");
        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[("Ada Lovelace".to_string(), date())]);
    }

    #[test]
    fn generator_errors_propagate() {
        let handler = RenderDraftHandler::new(Arc::new(RecordingGenerator {
            fail: true,
            ..Default::default()
        }));
        let result = handler.handle(RenderDraftCommand::dated(WillDraft::default(), date()));
        assert!(matches!(result, Err(DocumentError::Internal(_))));
    }

    #[test]
    fn renders_with_markdown_generator() {
        let handler = RenderDraftHandler::new(Arc::new(
            crate::adapters::document::MarkdownDraftGenerator::new(),
        ));
        let document = handler
            .handle(RenderDraftCommand::dated(WillDraft::default(), date()))
            .unwrap();
        assert!(document.contains("2026-03-14"));
    }
}
