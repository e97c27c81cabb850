//! Application layer for tri-health
//!
//! This crate contains use cases, port definitions, and the model context.
//! It depends only on the domain layer.

pub mod context;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use context::ModelContext;
pub use ports::{
    classifier::{Classifier, ClassifierError},
    model_store::{ModelStore, ModelStoreError},
    progress::{LoadProgressNotifier, NoProgress},
};
pub use use_cases::load_models::{LoadModelsError, LoadModelsUseCase};
pub use use_cases::run_prediction::{RunPredictionError, RunPredictionInput, RunPredictionUseCase};
