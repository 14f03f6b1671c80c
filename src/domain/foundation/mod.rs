//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! shared by the questionnaire, engine, and content modules.

mod errors;
mod ids;
mod percentage;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use percentage::Percentage;
