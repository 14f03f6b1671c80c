//! The fixed recommendation rule table.
//!
//! Rules run top to bottom on every evaluation. Order is observable: clause
//! sets keep the first insertion of a name, and cautions keep rule order.

use std::fmt;

use crate::domain::questionnaire::{AnswerSet, MaritalStatus, QuestionKey};

use super::Clause;

/// One step of the engine: a predicate and what it contributes when it holds.
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub applies: fn(&AnswerSet) -> bool,
    pub score_delta: u32,
    pub must: &'static [Clause],
    pub should: &'static [Clause],
    pub cautions: &'static [&'static str],
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .field("score_delta", &self.score_delta)
            .field("must", &self.must)
            .field("should", &self.should)
            .field("cautions", &self.cautions)
            .finish_non_exhaustive()
    }
}

pub const EXECUTOR: Clause = Clause::new(
    "Executor + alternate executor",
    "Names who manages your estate and who takes over if they can’t.",
);
pub const BENEFICIARIES: Clause = Clause::new(
    "Beneficiaries + residue clause",
    "States who inherits and what happens to everything not specifically listed.",
);
pub const CAPACITY_DRAFTING: Clause = Clause::new(
    "Capacity documentation / professional drafting",
    "If capacity could be questioned, professional help reduces challenges.",
);
pub const GUARDIAN: Clause = Clause::new(
    "Guardian / custodian clause (minors)",
    "Names who will care for minor children if both parents cannot.",
);
pub const MINOR_TRUST: Clause = Clause::new(
    "Trust language for minors",
    "Explains how funds are managed until children are old enough.",
);
pub const PROPERTY_WORDING: Clause = Clause::new(
    "Clear property/residue wording",
    "Real estate and major assets increase complexity; be explicit.",
);
pub const PROBATE_PLANNING: Clause = Clause::new(
    "Probate planning considerations",
    "Some assets may require probate; clarity reduces delays.",
);
pub const SPECIFIC_GIFTS: Clause = Clause::new(
    "Specific gifts clause",
    "Lists specific items and who receives them (keep descriptions clear).",
);
pub const PET_CARE: Clause = Clause::new(
    "Pet care clause",
    "Names a caregiver and optional funds or instructions.",
);
pub const REVOCATION: Clause = Clause::new(
    "Revocation clause (replace old wills)",
    "Ensures older wills are revoked to avoid conflicts.",
);
pub const PROFESSIONAL_REVIEW: Clause = Clause::new(
    "Professional review",
    "Businesses and disputes raise the risk of litigation—legal advice is strongly recommended.",
);
pub const POWER_OF_ATTORNEY: Clause = Clause::new(
    "Power of Attorney (property/personal care)",
    "A will only works after death; POA covers incapacity while alive.",
);
pub const STORAGE_PLAN: Clause = Clause::new(
    "Storage plan",
    "Store the original will safely and tell the executor where it is.",
);
pub const SIGNING_WITNESSING: Clause = Clause::new(
    "Proper signing + witnessing plan",
    "Most wills require two witnesses present at the same time. Avoid beneficiaries as witnesses for clean execution.",
);
pub const AFFIDAVIT_OF_EXECUTION: Clause = Clause::new(
    "Affidavit of execution (best practice)",
    "Helps prove the will was signed properly if witnesses can’t be located later.",
);

pub const ADULT_AGE_CAUTION: &str = "Most Ontario wills are made by adults (18+). If you are under 18, you may need legal guidance for exceptions.";
pub const COMMON_LAW_CAUTION: &str = "Common-law partners do not automatically inherit on intestacy. A will is especially important if you are common-law.";
pub const MISSING_ORIGINAL_CAUTION: &str = "If the original can’t be found, courts may presume it was revoked. Plan storage now.";

fn always(_: &AnswerSet) -> bool {
    true
}

fn not_confirmed_adult(a: &AnswerSet) -> bool {
    !a.is_yes(QuestionKey::Age18)
}

fn capacity_in_doubt(a: &AnswerSet) -> bool {
    !a.is_yes(QuestionKey::Capacity)
}

fn is_married(a: &AnswerSet) -> bool {
    a.marital_status() == Some(MaritalStatus::Married)
}

fn is_common_law(a: &AnswerSet) -> bool {
    a.marital_status() == Some(MaritalStatus::CommonLaw)
}

fn has_dependent_minors(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::Children)
}

fn owns_property(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::Property)
}

fn wants_specific_gifts(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::SpecificGifts)
}

fn has_pets(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::Pets)
}

fn business_or_dispute_risk(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::Business)
}

fn wants_poa_guidance(a: &AnswerSet) -> bool {
    a.is_yes(QuestionKey::Poa)
}

fn storage_unplanned(a: &AnswerSet) -> bool {
    !a.is_yes(QuestionKey::Storage)
}

/// Every rule, in evaluation order.
pub static RULES: [RecommendationRule; 13] = [
    RecommendationRule {
        id: "baseline",
        applies: always,
        score_delta: 0,
        must: &[EXECUTOR, BENEFICIARIES],
        should: &[],
        cautions: &[],
    },
    RecommendationRule {
        id: "age",
        applies: not_confirmed_adult,
        score_delta: 3,
        must: &[],
        should: &[],
        cautions: &[ADULT_AGE_CAUTION],
    },
    RecommendationRule {
        id: "capacity",
        applies: capacity_in_doubt,
        score_delta: 4,
        must: &[],
        should: &[CAPACITY_DRAFTING],
        cautions: &[],
    },
    RecommendationRule {
        id: "married",
        applies: is_married,
        score_delta: 1,
        must: &[],
        should: &[],
        cautions: &[],
    },
    RecommendationRule {
        id: "common_law",
        applies: is_common_law,
        score_delta: 2,
        must: &[],
        should: &[],
        cautions: &[COMMON_LAW_CAUTION],
    },
    RecommendationRule {
        id: "children",
        applies: has_dependent_minors,
        score_delta: 4,
        must: &[GUARDIAN],
        should: &[MINOR_TRUST],
        cautions: &[],
    },
    RecommendationRule {
        id: "property",
        applies: owns_property,
        score_delta: 2,
        must: &[],
        should: &[PROPERTY_WORDING, PROBATE_PLANNING],
        cautions: &[],
    },
    RecommendationRule {
        id: "specific_gifts",
        applies: wants_specific_gifts,
        score_delta: 1,
        must: &[SPECIFIC_GIFTS],
        should: &[],
        cautions: &[],
    },
    RecommendationRule {
        id: "pets",
        applies: has_pets,
        score_delta: 1,
        must: &[],
        should: &[PET_CARE],
        cautions: &[],
    },
    RecommendationRule {
        id: "business",
        applies: business_or_dispute_risk,
        score_delta: 4,
        must: &[REVOCATION],
        should: &[PROFESSIONAL_REVIEW],
        cautions: &[],
    },
    RecommendationRule {
        id: "poa",
        applies: wants_poa_guidance,
        score_delta: 0,
        must: &[],
        should: &[POWER_OF_ATTORNEY],
        cautions: &[],
    },
    RecommendationRule {
        id: "storage",
        applies: storage_unplanned,
        score_delta: 2,
        must: &[STORAGE_PLAN],
        should: &[],
        cautions: &[MISSING_ORIGINAL_CAUTION],
    },
    RecommendationRule {
        id: "execution",
        applies: always,
        score_delta: 0,
        must: &[SIGNING_WITNESSING],
        should: &[AFFIDAVIT_OF_EXECUTION],
        cautions: &[],
    },
];
