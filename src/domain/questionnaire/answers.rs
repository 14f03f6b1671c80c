//! AnswerSet - typed answers keyed by question.
//!
//! Each question has its own choice type. An unanswered question is `None`,
//! which never compares equal to any choice.

use serde::{Deserialize, Serialize};

use super::QuestionKey;
use crate::domain::foundation::ValidationError;

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }
}

/// Answer to the marital status question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    CommonLaw,
    Single,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "married",
            MaritalStatus::CommonLaw => "commonlaw",
            MaritalStatus::Single => "single",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "married" => Some(MaritalStatus::Married),
            "commonlaw" => Some(MaritalStatus::CommonLaw),
            "single" => Some(MaritalStatus::Single),
            _ => None,
        }
    }
}

/// The current answer for each question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnswerSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age18: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capacity: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    married: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    property: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specific_gifts: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pets: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    business: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    poa: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    storage: Option<YesNo>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer set from `(wire key, wire value)` pairs.
    ///
    /// Later pairs for the same key replace earlier ones.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, ValidationError> {
        let mut answers = Self::new();
        for (key, value) in pairs {
            answers.record(key.parse()?, value)?;
        }
        Ok(answers)
    }

    /// Returns true if `raw` is a valid wire value for `key`.
    pub fn accepts(key: QuestionKey, raw: &str) -> bool {
        match key {
            QuestionKey::Married => MaritalStatus::parse(raw).is_some(),
            _ => YesNo::parse(raw).is_some(),
        }
    }

    /// Records the answer for `key`, replacing any previous answer.
    pub fn record(&mut self, key: QuestionKey, raw: &str) -> Result<(), ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::empty_field(key.as_str()));
        }
        let unknown = || ValidationError::unknown_choice(key.as_str(), raw);

        if key == QuestionKey::Married {
            self.married = Some(MaritalStatus::parse(raw).ok_or_else(unknown)?);
            return Ok(());
        }

        let answer = YesNo::parse(raw).ok_or_else(unknown)?;
        if let Some(slot) = self.yes_no_slot(key) {
            *slot = Some(answer);
        }
        Ok(())
    }

    /// Returns the recorded wire value for `key`, if answered.
    pub fn value(&self, key: QuestionKey) -> Option<&'static str> {
        match key {
            QuestionKey::Married => self.married.map(|m| m.as_str()),
            _ => self.yes_no(key).map(|a| a.as_str()),
        }
    }

    pub fn is_answered(&self, key: QuestionKey) -> bool {
        self.value(key).is_some()
    }

    /// True only when `key` was answered "yes".
    pub fn is_yes(&self, key: QuestionKey) -> bool {
        self.yes_no(key) == Some(YesNo::Yes)
    }

    pub fn marital_status(&self) -> Option<MaritalStatus> {
        self.married
    }

    /// Number of questions with a recorded answer.
    pub fn answered_count(&self) -> usize {
        QuestionKey::ALL
            .iter()
            .filter(|key| self.is_answered(**key))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }

    /// Forgets every answer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn yes_no(&self, key: QuestionKey) -> Option<YesNo> {
        match key {
            QuestionKey::Age18 => self.age18,
            QuestionKey::Capacity => self.capacity,
            QuestionKey::Married => None,
            QuestionKey::Children => self.children,
            QuestionKey::Property => self.property,
            QuestionKey::SpecificGifts => self.specific_gifts,
            QuestionKey::Pets => self.pets,
            QuestionKey::Business => self.business,
            QuestionKey::Poa => self.poa,
            QuestionKey::Storage => self.storage,
        }
    }

    fn yes_no_slot(&mut self, key: QuestionKey) -> Option<&mut Option<YesNo>> {
        match key {
            QuestionKey::Age18 => Some(&mut self.age18),
            QuestionKey::Capacity => Some(&mut self.capacity),
            QuestionKey::Married => None,
            QuestionKey::Children => Some(&mut self.children),
            QuestionKey::Property => Some(&mut self.property),
            QuestionKey::SpecificGifts => Some(&mut self.specific_gifts),
            QuestionKey::Pets => Some(&mut self.pets),
            QuestionKey::Business => Some(&mut self.business),
            QuestionKey::Poa => Some(&mut self.poa),
            QuestionKey::Storage => Some(&mut self.storage),
        }
    }
}
