//! Classifier port
//!
//! Defines the interface of a loaded, pre-trained binary classifier.

use thiserror::Error;
use trihealth_domain::{DomainError, FeatureVector};

/// Errors that can occur while a classifier evaluates a batch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Feature vector has {actual} values, model expects {expected}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Feature vector contains a non-finite value")]
    NonFinite,

    #[error("Classifier returned no labels")]
    EmptyResult,

    #[error(transparent)]
    InvalidLabel(#[from] DomainError),

    #[error("Other error: {0}")]
    Other(String),
}

/// A pre-trained classifier (opaque `predict(batch) -> labels`)
///
/// Implementations live in the infrastructure layer. A classifier is
/// read-only after construction and may be called any number of times.
pub trait Classifier: Send + Sync {
    /// Number of features each vector must have
    fn arity(&self) -> usize;

    /// Feature names recorded at training time, if the artifact carries them
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Short description for logs (e.g. `logistic(8)`)
    fn describe(&self) -> String {
        format!("classifier({})", self.arity())
    }

    /// Predict one raw label per vector in the batch
    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError>;
}
