//! Question definitions and the reference question catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Identifies a question and the answer slot it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    Age18,
    Capacity,
    Married,
    Children,
    Property,
    SpecificGifts,
    Pets,
    Business,
    Poa,
    Storage,
}

impl QuestionKey {
    /// Every key, in reference presentation order.
    pub const ALL: [QuestionKey; 10] = [
        QuestionKey::Age18,
        QuestionKey::Capacity,
        QuestionKey::Married,
        QuestionKey::Children,
        QuestionKey::Property,
        QuestionKey::SpecificGifts,
        QuestionKey::Pets,
        QuestionKey::Business,
        QuestionKey::Poa,
        QuestionKey::Storage,
    ];

    /// Returns the wire name used in answer files.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::Age18 => "age18",
            QuestionKey::Capacity => "capacity",
            QuestionKey::Married => "married",
            QuestionKey::Children => "children",
            QuestionKey::Property => "property",
            QuestionKey::SpecificGifts => "specificGifts",
            QuestionKey::Pets => "pets",
            QuestionKey::Business => "business",
            QuestionKey::Poa => "poa",
            QuestionKey::Storage => "storage",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionKey::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("question_key", format!("unknown key '{}'", s)))
    }
}

/// One selectable answer: the stored value and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single questionnaire prompt with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: String,
    pub help_text: String,
    pub choices: Vec<Choice>,
}

impl Question {
    /// Creates a question with no choices yet.
    pub fn new(key: QuestionKey, prompt: impl Into<String>, help_text: impl Into<String>) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            help_text: help_text.into(),
            choices: Vec::new(),
        }
    }

    /// Appends a choice, keeping declaration order.
    pub fn with_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, label));
        self
    }

    /// Returns true if `value` is one of this question's choice values.
    pub fn has_choice(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c.value == value)
    }

    /// Looks up a choice by its 1-based display number.
    pub fn choice_by_number(&self, number: usize) -> Option<&Choice> {
        number.checked_sub(1).and_then(|i| self.choices.get(i))
    }
}

static STANDARD_QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question::new(
            QuestionKey::Age18,
            "Are you 18 or older?",
            "In Ontario, most people must be 18+ to make a will (with limited exceptions).",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No / not sure"),
        Question::new(
            QuestionKey::Capacity,
            "Do you have testamentary capacity right now?",
            "Capacity means you understand what a will is, what you own, and who might expect to benefit.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "Not sure / could be questioned"),
        Question::new(
            QuestionKey::Married,
            "Are you legally married?",
            "Marriage matters for intestacy and spousal rights. Common-law partners do not automatically inherit on intestacy.",
        )
        .with_choice("married", "Yes (married)")
        .with_choice("commonlaw", "No (common-law)")
        .with_choice("single", "No (single)"),
        Question::new(
            QuestionKey::Children,
            "Do you have children under 18 who depend on you?",
            "If yes, guardian/custodian clauses become essential.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::Property,
            "Do you own or co-own real property (house/condo) or major assets?",
            "Property increases complexity and probate considerations.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::SpecificGifts,
            "Do you want to leave specific items to specific people?",
            "If yes, add a specific gifts clause (and keep it clear).",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::Pets,
            "Do you have pets you want cared for?",
            "You can include a pet care clause naming a caregiver and optional funds.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::Business,
            "Do you own a business or expect disputes among family members?",
            "This often raises risk and is a strong reason to get legal advice.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::Poa,
            "Do you also need someone to manage finances/health decisions while alive if you become incapable?",
            "That’s not a will. It’s a Power of Attorney (property / personal care).",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No"),
        Question::new(
            QuestionKey::Storage,
            "Will your executor know where the original will is stored?",
            "If the original is missing, courts may presume it was revoked.",
        )
        .with_choice("yes", "Yes")
        .with_choice("no", "No / not planned"),
    ]
});

/// Returns the reference questionnaire in presentation order.
pub fn standard_questions() -> &'static [Question] {
    &STANDARD_QUESTIONS
}
