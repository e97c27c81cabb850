//! Infrastructure layer for tri-health
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod models;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileModelsConfig, FileOutputConfig, FileTuiConfig};
pub use models::{
    ArtifactError, ArtifactKind, DEFAULT_MODELS_DIR, FileModelStore, LinearClassifier,
    ModelArtifact,
};
