//! Model store port
//!
//! Defines how serialized classifiers are obtained from durable storage.

use super::classifier::Classifier;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use trihealth_domain::Condition;

/// Errors that can occur while loading a model artifact
#[derive(Error, Debug)]
pub enum ModelStoreError {
    #[error("Model artifact for {condition} not found at {location}")]
    Missing { condition: Condition, location: String },

    #[error("Model artifact at {location} is corrupt: {reason}")]
    Corrupt { location: String, reason: String },

    #[error("Model artifact at {location} is incompatible: {reason}")]
    Incompatible { location: String, reason: String },

    #[error("Failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Source of pre-trained classifiers
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// Load the classifier for a condition
    async fn load(&self, condition: Condition) -> Result<Arc<dyn Classifier>, ModelStoreError>;

    /// Where the artifact for a condition is expected (for messages)
    fn location(&self, condition: Condition) -> String;
}
