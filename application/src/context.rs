//! Immutable model context created once at startup.

use crate::ports::classifier::Classifier;
use std::fmt;
use std::sync::Arc;
use trihealth_domain::Condition;

/// The three loaded classifiers.
///
/// Built by [`LoadModelsUseCase`](crate::use_cases::load_models::LoadModelsUseCase)
/// and shared (via `Arc`) with every prediction. Never reloaded per request.
#[derive(Clone)]
pub struct ModelContext {
    diabetes: Arc<dyn Classifier>,
    heart_disease: Arc<dyn Classifier>,
    parkinsons: Arc<dyn Classifier>,
}

impl ModelContext {
    pub fn new(
        diabetes: Arc<dyn Classifier>,
        heart_disease: Arc<dyn Classifier>,
        parkinsons: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            diabetes,
            heart_disease,
            parkinsons,
        }
    }

    /// The classifier serving a condition
    pub fn classifier(&self, condition: Condition) -> &dyn Classifier {
        match condition {
            Condition::Diabetes => self.diabetes.as_ref(),
            Condition::HeartDisease => self.heart_disease.as_ref(),
            Condition::Parkinsons => self.parkinsons.as_ref(),
        }
    }
}

impl fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelContext")
            .field("diabetes", &self.diabetes.describe())
            .field("heart_disease", &self.heart_disease.describe())
            .field("parkinsons", &self.parkinsons.describe())
            .finish()
    }
}
