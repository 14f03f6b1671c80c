//! Integration tests for file-driven commands.
//!
//! Answers and drafts are written to temp files, loaded through the loader
//! adapter, and passed to the evaluate and preview handlers.

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use will_clinic::adapters::{load_document, LoadError, MarkdownDraftGenerator};
use will_clinic::application::{
    EvaluateAnswersHandler, EvaluateAnswersQuery, RenderDraftCommand, RenderDraftHandler,
};
use will_clinic::domain::draft::WillDraft;
use will_clinic::domain::questionnaire::{AnswerSet, QuestionKey};
use will_clinic::domain::recommendation::RiskTier;
use will_clinic::ports::GenerationOptions;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
}

// =============================================================================
// Evaluate
// =============================================================================

#[test]
fn evaluates_yaml_answers() {
    let file = temp_file(
        ".yaml",
        "age18: \"yes\"\ncapacity: \"yes\"\nmarried: commonlaw\nchildren: \"yes\"\nproperty: \"yes\"\n",
    );
    let answers: AnswerSet = load_document(file.path()).unwrap();

    let report = EvaluateAnswersHandler::new().handle(EvaluateAnswersQuery { answers });

    assert_eq!(report.answered, 5);
    assert!(report.unanswered.contains(&QuestionKey::Storage));
    assert!(report.result.must_clauses.contains("Guardian / custodian clause (minors)"));
    assert!(report.result.should_clauses.contains("Trust language for minors"));
    assert!(report.result.score >= 8);
    assert_eq!(report.result.tier, RiskTier::High);
}

#[test]
fn evaluates_json_answers() {
    let file = temp_file(
        ".json",
        r#"{"age18":"yes","capacity":"yes","married":"single","children":"no","property":"no",
            "specificGifts":"no","pets":"no","business":"no","poa":"no","storage":"yes"}"#,
    );
    let answers: AnswerSet = load_document(file.path()).unwrap();

    let report = EvaluateAnswersHandler::new().handle(EvaluateAnswersQuery { answers });

    assert!(report.is_complete());
    assert_eq!(report.result.score, 0);
    assert_eq!(report.result.tier, RiskTier::Low);
}

#[test]
fn rejects_answers_outside_the_choices() {
    let file = temp_file(".json", r#"{"married":"engaged"}"#);
    let result: Result<AnswerSet, LoadError> = load_document(file.path());
    assert!(matches!(result, Err(LoadError::Json { .. })));
}

#[test]
fn rejects_unknown_questions() {
    let file = temp_file(".yaml", "favouriteColour: blue\n");
    let result: Result<AnswerSet, LoadError> = load_document(file.path());
    assert!(matches!(result, Err(LoadError::Yaml { .. })));
}

// =============================================================================
// Preview
// =============================================================================

#[test]
fn renders_preview_from_yaml_draft() {
    let file = temp_file(
        ".yml",
        "testatorName: Jane Doe\n\
         testatorCity: Ottawa\n\
         executorName: Sam Doe\n\
         beneficiaries: Ana, Ben\n\
         hasMinors: \"yes\"\n\
         guardianName: Lee Doe\n",
    );
    let draft: WillDraft = load_document(file.path()).unwrap();
    let handler = RenderDraftHandler::new(Arc::new(MarkdownDraftGenerator::new()));

    let document = handler.handle(RenderDraftCommand::dated(draft, date())).unwrap();

    assert!(document.starts_with("# Last Will and Testament (Educational Draft)"));
    assert!(document.contains("*Made in Ottawa, Ontario • Date: 2026-10-01*"));
    assert!(document.contains("I, Jane Doe, declare"));
    assert!(document.contains("1. Ana\n2. Ben"));
    assert!(document.contains("I appoint Lee Doe as guardian/custodian"));
    assert!(!document.contains("**Pet Care.**"));
}

#[test]
fn empty_draft_renders_placeholders() {
    let file = temp_file(".json", "{}");
    let draft: WillDraft = load_document(file.path()).unwrap();
    let handler = RenderDraftHandler::new(Arc::new(MarkdownDraftGenerator::new()));

    let document = handler.handle(RenderDraftCommand::dated(draft, date())).unwrap();

    assert!(document.contains("[Testator Name]"));
    assert!(document.contains("[Beneficiaries]"));
    assert!(!document.contains("**Guardianship.**"));
}

#[test]
fn body_only_preview_omits_signature_lines() {
    let file = temp_file(".json", r#"{"testatorName":"Jane Doe"}"#);
    let draft: WillDraft = load_document(file.path()).unwrap();
    let handler = RenderDraftHandler::new(Arc::new(MarkdownDraftGenerator::new()));

    let document = handler
        .handle(RenderDraftCommand {
            draft,
            options: GenerationOptions::body_only(date()),
        })
        .unwrap();

    assert!(document.contains("I, Jane Doe, declare"));
    assert!(!document.contains("Testator signature"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let file = temp_file(".txt", "{}");
    let result: Result<WillDraft, LoadError> = load_document(file.path());
    assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
}
