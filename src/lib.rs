//! Will Clinic - Educational Will-Writing Assistant
//!
//! This crate walks a user through a ten-question intake, scores the answers
//! against a fixed rule table, and recommends will clauses by complexity
//! tier. It also carries a will-making walkthrough, a searchable resource
//! vault, and a markdown preview of a simple will.
//!
//! Nothing here is legal advice.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
