//! Domain layer for tri-health
//!
//! This crate contains the core types: conditions, feature schemas, form
//! input, feature vectors and outcome payloads. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Feature Schema
//!
//! Each [`Condition`] has a [`FeatureSchema`]: the ordered, named list of
//! inputs its classifier was trained on. The schema is the single source of
//! truth for feature order.
//!
//! ## Assembly and Outcome
//!
//! - **Assembly**: [`FeatureAssembler`] turns a validated [`FormInput`] into a
//!   [`FeatureVector`] in schema order
//! - **Outcome**: a [`PredictionLabel`] selects one of two fixed
//!   [`OutcomePayload`]s, or the prediction is [`PredictionOutcome::Unavailable`]

pub mod config;
pub mod core;
pub mod feature;
pub mod input;
pub mod outcome;
pub mod schema;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{condition::Condition, error::DomainError};
pub use feature::{FeatureAssembler, FeatureVector};
pub use input::FormInput;
pub use outcome::{
    PredictionOutcome, PredictionReport, label::PredictionLabel, payload::OutcomePayload,
};
pub use schema::{CategoryOption, FeatureSchema, FieldKind, FieldSpec, FieldValue};
