//! Load Models use case
//!
//! Loads the three classifiers at startup and checks each against its
//! feature schema. Any failure is fatal: no predictions can be served.

use crate::context::ModelContext;
use crate::ports::classifier::Classifier;
use crate::ports::model_store::{ModelStore, ModelStoreError};
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use trihealth_domain::{Condition, FeatureSchema};

/// Errors that can occur while loading models
#[derive(Error, Debug)]
pub enum LoadModelsError {
    #[error(transparent)]
    Store(#[from] ModelStoreError),

    #[error("{condition} model expects {actual} features, the input form provides {expected}")]
    ArityMismatch {
        condition: Condition,
        expected: usize,
        actual: usize,
    },

    #[error(
        "{condition} model feature order differs from the input form at position {position}: model has '{model}', form has '{schema}'"
    )]
    FeatureOrderMismatch {
        condition: Condition,
        position: usize,
        model: String,
        schema: String,
    },
}

/// Use case for loading all classifiers into a [`ModelContext`]
pub struct LoadModelsUseCase<S: ModelStore + 'static> {
    store: Arc<S>,
}

impl<S: ModelStore + 'static> LoadModelsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<ModelContext, LoadModelsError> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<ModelContext, LoadModelsError> {
        progress.on_load_start(Condition::ALL.len());

        let diabetes = self.load_one(Condition::Diabetes, progress).await?;
        let heart_disease = self.load_one(Condition::HeartDisease, progress).await?;
        let parkinsons = self.load_one(Condition::Parkinsons, progress).await?;

        progress.on_load_complete();
        Ok(ModelContext::new(diabetes, heart_disease, parkinsons))
    }

    async fn load_one(
        &self,
        condition: Condition,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<Arc<dyn Classifier>, LoadModelsError> {
        let location = self.store.location(condition);
        debug!("Loading {} model from {}", condition, location);

        let result = match self.store.load(condition).await {
            Ok(classifier) => {
                Self::check_schema(condition, classifier.as_ref()).map(|_| classifier)
            }
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(classifier) => {
                info!("Loaded {} model: {}", condition, classifier.describe());
                progress.on_model_loaded(condition, true);
            }
            Err(e) => {
                warn!("Failed to load {} model: {}", condition, e);
                progress.on_model_loaded(condition, false);
            }
        }

        result
    }

    /// Verify the classifier's shape against the condition's schema
    fn check_schema(condition: Condition, classifier: &dyn Classifier) -> Result<(), LoadModelsError> {
        let schema = FeatureSchema::for_condition(condition);

        if classifier.arity() != schema.arity() {
            return Err(LoadModelsError::ArityMismatch {
                condition,
                expected: schema.arity(),
                actual: classifier.arity(),
            });
        }

        if let Some(names) = classifier.feature_names()
            && !schema.matches_order(names)
        {
            let expected = schema.feature_names();
            let position = names
                .iter()
                .zip(&expected)
                .position(|(model, form)| model != form)
                .unwrap_or_else(|| names.len().min(expected.len()));
            return Err(LoadModelsError::FeatureOrderMismatch {
                condition,
                position,
                model: names.get(position).cloned().unwrap_or_default(),
                schema: expected
                    .get(position)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            });
        }

        Ok(())
    }
}
