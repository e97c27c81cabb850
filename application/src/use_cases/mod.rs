//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod load_models;
pub mod run_prediction;
