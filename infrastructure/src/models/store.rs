//! File-backed model store
//!
//! Artifacts live under one directory, one JSON file per condition:
//!
//! ```text
//! saved_models/
//!   diabetes_model.json
//!   heart_disease_model.json
//!   parkinsons_model.json
//! ```

use super::artifact::ModelArtifact;
use super::linear::LinearClassifier;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use trihealth_application::{Classifier, ModelStore, ModelStoreError};
use trihealth_domain::Condition;

/// Default artifact directory, relative to the working directory
pub const DEFAULT_MODELS_DIR: &str = "saved_models";

/// Loads [`ModelArtifact`]s from the filesystem
#[derive(Debug, Clone)]
pub struct FileModelStore {
    dir: PathBuf,
    overrides: HashMap<Condition, PathBuf>,
}

impl FileModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Use a specific file for one condition.
    ///
    /// Relative paths are resolved against the store directory.
    pub fn with_file(mut self, condition: Condition, file: impl Into<PathBuf>) -> Self {
        self.overrides.insert(condition, file.into());
        self
    }

    /// Full path of the artifact for a condition
    pub fn path_for(&self, condition: Condition) -> PathBuf {
        match self.overrides.get(&condition) {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => self.dir.join(file),
            None => self
                .dir
                .join(format!("{}.json", condition.artifact_stem())),
        }
    }

    /// Read and validate the raw artifact for a condition
    pub async fn read_artifact(&self, condition: Condition) -> Result<ModelArtifact, ModelStoreError> {
        let path = self.path_for(condition);
        let location = path.display().to_string();

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ModelStoreError::Missing {
                    condition,
                    location: location.clone(),
                },
                _ => ModelStoreError::Io {
                    location: location.clone(),
                    source,
                },
            })?;

        let artifact: ModelArtifact =
            serde_json::from_str(&raw).map_err(|e| ModelStoreError::Corrupt {
                location: location.clone(),
                reason: e.to_string(),
            })?;

        artifact
            .validate(condition)
            .map_err(|e| ModelStoreError::Incompatible {
                location,
                reason: e.to_string(),
            })?;

        debug!(
            "Read {} artifact: kind={:?}, {} weights",
            condition,
            artifact.kind,
            artifact.weights.len()
        );
        Ok(artifact)
    }
}

impl Default for FileModelStore {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS_DIR)
    }
}

#[async_trait]
impl ModelStore for FileModelStore {
    async fn load(&self, condition: Condition) -> Result<Arc<dyn Classifier>, ModelStoreError> {
        let artifact = self.read_artifact(condition).await?;
        Ok(Arc::new(LinearClassifier::from(artifact)))
    }

    fn location(&self, condition: Condition) -> String {
        self.path_for(condition).display().to_string()
    }
}
