//! Core domain concepts shared across all subdomains.
//!
//! - [`condition::Condition`] — the three screening targets
//! - [`error::DomainError`] — domain-level errors

pub mod condition;
pub mod error;
