//! WillDraft - free-text fields for the educational document preview.
//!
//! Every field is optional. Blank fields are rendered as placeholders by the
//! document generator, so a draft is never invalid.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw form input for the will preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WillDraft {
    pub testator_name: String,
    pub testator_city: String,
    pub executor_name: String,
    pub alt_executor_name: String,
    /// Comma-separated beneficiary names.
    pub beneficiaries: String,
    pub specific_gift: String,
    #[serde(deserialize_with = "yes_or_bool")]
    pub has_minors: bool,
    pub guardian_name: String,
    pub pet_clause: String,
    pub storage_note: String,
}

impl WillDraft {
    /// Beneficiary names split on commas, trimmed, blanks dropped.
    pub fn beneficiary_list(&self) -> Vec<&str> {
        split_list(&self.beneficiaries)
    }
}

/// Splits a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns `value` trimmed, or `None` if it is blank.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// Form selects send "yes"/"no"; files may use real booleans.
fn yes_or_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.trim().eq_ignore_ascii_case("yes"),
    })
}
