//! Model artifacts and the classifier built from them

pub mod artifact;
pub mod linear;
pub mod store;

pub use artifact::{ArtifactError, ArtifactKind, FORMAT_VERSION, ModelArtifact};
pub use linear::LinearClassifier;
pub use store::{DEFAULT_MODELS_DIR, FileModelStore};
