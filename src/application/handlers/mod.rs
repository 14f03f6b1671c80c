//! Command and query handlers.
//!
//! Organized by area:
//! - `questionnaire/` - Interactive interview and offline evaluation
//! - `resources/` - Walkthrough, vault search, and draft preview

pub mod questionnaire;
pub mod resources;

pub use questionnaire::*;
pub use resources::*;
