//! Binary prediction label

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Label produced by a classifier; `Positive` means the condition was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionLabel {
    Negative,
    Positive,
}

impl PredictionLabel {
    /// Raw class value as emitted by the classifier
    pub fn as_raw(&self) -> i64 {
        match self {
            PredictionLabel::Negative => 0,
            PredictionLabel::Positive => 1,
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, PredictionLabel::Positive)
    }
}

impl TryFrom<i64> for PredictionLabel {
    type Error = DomainError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(PredictionLabel::Negative),
            1 => Ok(PredictionLabel::Positive),
            other => Err(DomainError::InvalidLabel(other)),
        }
    }
}

impl std::fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionLabel::Negative => write!(f, "negative"),
            PredictionLabel::Positive => write!(f, "positive"),
        }
    }
}
