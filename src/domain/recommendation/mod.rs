//! Recommendation module - the questionnaire-to-recommendation engine.
//!
//! # Module Organization
//!
//! - `clause` - Clause and the insert-if-absent ClauseSet
//! - `rules` - the ordered rule table and its clause/caution texts
//! - `engine` - evaluation over an AnswerSet
//! - `tier` - score thresholds
//! - `result` - RecommendationResult

mod clause;
mod engine;
mod result;
pub mod rules;
mod tier;

pub use clause::{Clause, ClauseSet};
pub use engine::RecommendationEngine;
pub use result::RecommendationResult;
pub use rules::RecommendationRule;
pub use tier::{RiskTier, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
