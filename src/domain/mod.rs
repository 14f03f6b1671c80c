//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Questions, typed answers, and the flow controller
//! - `recommendation` - Rule engine mapping answers to clauses and a risk tier
//! - `walkthrough` - The will-making checklist
//! - `vault` - Resource directory with search
//! - `draft` - Form input for the document preview

pub mod draft;
pub mod foundation;
pub mod questionnaire;
pub mod recommendation;
pub mod vault;
pub mod walkthrough;
