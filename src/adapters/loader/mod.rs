//! File loaders for answer sets and will drafts.
//!
//! The format is chosen by extension: `.json`, or `.yaml`/`.yml`.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading an input document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported file type for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Reads and deserializes `path`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format =
        InputFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, bytes = text.len(), "Loaded input document");

    parse_document(&text, format, path)
}

/// Deserializes already-read text; `origin` is only used in error messages.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: InputFormat,
    origin: &Path,
) -> Result<T, LoadError> {
    match format {
        InputFormat::Json => serde_json::from_str(text).map_err(|source| LoadError::Json {
            path: origin.to_path_buf(),
            source,
        }),
        InputFormat::Yaml => serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::WillDraft;
    use crate::domain::questionnaire::{AnswerSet, QuestionKey};
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_answers_from_json() {
        let file = write_temp(".json", r#"{"age18":"yes","married":"single"}"#);
        let answers: AnswerSet = load_document(file.path()).unwrap();
        assert!(answers.is_yes(QuestionKey::Age18));
        assert_eq!(answers.answered_count(), 2);
    }

    #[test]
    fn loads_answers_from_yaml() {
        let file = write_temp(".yml", "storage: \"no\"\nchildren: \"yes\"\n");
        let answers: AnswerSet = load_document(file.path()).unwrap();
        assert!(answers.is_yes(QuestionKey::Children));
        assert_eq!(answers.value(QuestionKey::Storage), Some("no"));
    }

    #[test]
    fn loads_draft_from_yaml_with_yes_flag() {
        let file = write_temp(
            ".yaml",
            "testatorName: Sam Lee\nbeneficiaries: Ana, Ben\nhasMinors: \"yes\"\n",
        );
        let draft: WillDraft = load_document(file.path()).unwrap();
        assert_eq!(draft.beneficiary_list(), vec!["Ana", "Ben"]);
        assert!(draft.has_minors);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".txt", "{}");
        let err = load_document::<AnswerSet>(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }

    #[test]
    fn reports_invalid_json() {
        let file = write_temp(".json", r#"{"pets":"maybe"}"#);
        let err = load_document::<AnswerSet>(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn reports_missing_file() {
        let err = load_document::<AnswerSet>(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn format_detection_ignores_case() {
        assert_eq!(InputFormat::from_path(Path::new("a.JSON")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("a.Yaml")), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path(Path::new("noext")), None);
    }
}
