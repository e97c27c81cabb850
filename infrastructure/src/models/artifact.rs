//! Serialized model artifact format (JSON, version 1)
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "condition": "diabetes",
//!   "kind": "logistic",
//!   "feature_names": ["Pregnancies", "Glucose", ...],
//!   "weights": [0.12, 0.035, ...],
//!   "intercept": -8.4,
//!   "threshold": 0.5
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trihealth_domain::Condition;

/// The only artifact version this build understands
pub const FORMAT_VERSION: u32 = 1;

/// Errors found while validating a parsed artifact
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArtifactError {
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("artifact is for {found}, expected {expected}")]
    ConditionMismatch { expected: Condition, found: Condition },

    #[error("artifact has no weights")]
    EmptyWeights,

    #[error("artifact lists {names} feature names but {weights} weights")]
    NameCountMismatch { names: usize, weights: usize },

    #[error("{0} contains a non-finite number")]
    NonFinite(&'static str),

    #[error("logistic threshold {0} is outside (0, 1)")]
    InvalidThreshold(f64),
}

/// Decision rule applied to the linear score `w·x + b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Positive iff the score is greater than zero (SVM decision function)
    Linear,
    /// Positive iff `sigmoid(score) >= threshold`
    Logistic,
}

/// Raw artifact as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub condition: Condition,
    pub kind: ArtifactKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl ModelArtifact {
    /// Check internal consistency and that the artifact serves `expected`
    pub fn validate(&self, expected: Condition) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }

        if self.condition != expected {
            return Err(ArtifactError::ConditionMismatch {
                expected,
                found: self.condition,
            });
        }

        if self.weights.is_empty() {
            return Err(ArtifactError::EmptyWeights);
        }

        if let Some(names) = &self.feature_names
            && names.len() != self.weights.len()
        {
            return Err(ArtifactError::NameCountMismatch {
                names: names.len(),
                weights: self.weights.len(),
            });
        }

        if !self.weights.iter().all(|w| w.is_finite()) {
            return Err(ArtifactError::NonFinite("weights"));
        }

        if !self.intercept.is_finite() {
            return Err(ArtifactError::NonFinite("intercept"));
        }

        if let Some(t) = self.threshold
            && !(t > 0.0 && t < 1.0)
        {
            return Err(ArtifactError::InvalidThreshold(t));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            format_version: 1,
            condition: Condition::Diabetes,
            kind: ArtifactKind::Logistic,
            feature_names: None,
            weights: vec![0.1; 8],
            intercept: -1.0,
            threshold: None,
        }
    }

    #[test]
    fn test_valid_artifact() {
        assert_eq!(artifact().validate(Condition::Diabetes), Ok(()));
    }

    #[test]
    fn test_rejects_other_version() {
        let mut a = artifact();
        a.format_version = 2;
        assert_eq!(
            a.validate(Condition::Diabetes),
            Err(ArtifactError::UnsupportedVersion {
                found: 2,
                expected: 1
            })
        );
    }

    #[test]
    fn test_rejects_wrong_condition() {
        assert!(matches!(
            artifact().validate(Condition::Parkinsons),
            Err(ArtifactError::ConditionMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_name_count_mismatch() {
        let mut a = artifact();
        a.feature_names = Some(vec!["Glucose".to_string()]);
        assert_eq!(
            a.validate(Condition::Diabetes),
            Err(ArtifactError::NameCountMismatch {
                names: 1,
                weights: 8
            })
        );
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let mut a = artifact();
        a.threshold = Some(1.5);
        assert_eq!(
            a.validate(Condition::Diabetes),
            Err(ArtifactError::InvalidThreshold(1.5))
        );
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{
            "format_version": 1,
            "condition": "heart-disease",
            "kind": "linear",
            "weights": [1.0, -1.0],
            "intercept": 0.0
        }"#;
        let a: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(a.condition, Condition::HeartDisease);
        assert_eq!(a.kind, ArtifactKind::Linear);
        assert!(a.feature_names.is_none());
        assert!(a.threshold.is_none());
    }
}
