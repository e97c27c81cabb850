//! Prediction outcomes
//!
//! - [`label::PredictionLabel`] — binary classifier output
//! - [`payload::OutcomePayload`] — fixed display text selected by a label
//! - [`PredictionOutcome`] — resolved payload, or a reason the prediction
//!   could not be made
//! - [`PredictionReport`] — everything a surface needs to render one result

pub mod label;
pub mod payload;

use crate::core::condition::Condition;
use crate::feature::FeatureVector;
use label::PredictionLabel;
use payload::OutcomePayload;
use serde::Serialize;

/// Result of one prediction request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionOutcome {
    /// The classifier answered with a valid label
    Resolved {
        label: PredictionLabel,
        #[serde(flatten)]
        payload: OutcomePayload,
    },
    /// The classifier failed; the surface shows a distinct third state
    Unavailable { reason: String },
}

impl PredictionOutcome {
    /// Map a label to its fixed payload
    pub fn resolved(condition: Condition, label: PredictionLabel) -> Self {
        PredictionOutcome::Resolved {
            label,
            payload: *OutcomePayload::select(condition, label),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        PredictionOutcome::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn label(&self) -> Option<PredictionLabel> {
        match self {
            PredictionOutcome::Resolved { label, .. } => Some(*label),
            PredictionOutcome::Unavailable { .. } => None,
        }
    }

    pub fn payload(&self) -> Option<&OutcomePayload> {
        match self {
            PredictionOutcome::Resolved { payload, .. } => Some(payload),
            PredictionOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PredictionOutcome::Resolved { .. })
    }
}

/// A rendered-ready prediction result (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub condition: Condition,
    pub feature_names: Vec<&'static str>,
    pub features: FeatureVector,
    pub outcome: PredictionOutcome,
}

impl PredictionReport {
    pub fn new(condition: Condition, features: FeatureVector, outcome: PredictionOutcome) -> Self {
        Self {
            condition,
            feature_names: crate::schema::FeatureSchema::for_condition(condition).feature_names(),
            features,
            outcome,
        }
    }

    /// Feature names paired with their assembled values
    pub fn named_features(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.feature_names
            .iter()
            .copied()
            .zip(self.features.as_slice().iter().copied())
    }
}
