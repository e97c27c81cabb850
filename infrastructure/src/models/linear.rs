//! Linear classifier backed by a [`ModelArtifact`]

use super::artifact::{ArtifactKind, ModelArtifact};
use trihealth_application::{Classifier, ClassifierError};
use trihealth_domain::FeatureVector;

const DEFAULT_THRESHOLD: f64 = 0.5;

/// Linear decision model: `score = w·x + b`.
///
/// Covers linear SVMs (`score > 0`) and logistic regression
/// (`sigmoid(score) >= threshold`).
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    kind: ArtifactKind,
    weights: Vec<f64>,
    intercept: f64,
    threshold: f64,
    feature_names: Option<Vec<String>>,
}

impl LinearClassifier {
    pub fn new(kind: ArtifactKind, weights: Vec<f64>, intercept: f64) -> Self {
        Self {
            kind,
            weights,
            intercept,
            threshold: DEFAULT_THRESHOLD,
            feature_names: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }

    /// Raw decision score for one vector
    pub fn score(&self, features: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    fn label(&self, score: f64) -> i64 {
        let positive = match self.kind {
            ArtifactKind::Linear => score > 0.0,
            ArtifactKind::Logistic => sigmoid(score) >= self.threshold,
        };
        i64::from(positive)
    }
}

impl From<ModelArtifact> for LinearClassifier {
    fn from(artifact: ModelArtifact) -> Self {
        let mut classifier = Self::new(artifact.kind, artifact.weights, artifact.intercept);
        if let Some(threshold) = artifact.threshold {
            classifier = classifier.with_threshold(threshold);
        }
        if let Some(names) = artifact.feature_names {
            classifier = classifier.with_feature_names(names);
        }
        classifier
    }
}

impl Classifier for LinearClassifier {
    fn arity(&self) -> usize {
        self.weights.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn describe(&self) -> String {
        let kind = match self.kind {
            ArtifactKind::Linear => "linear",
            ArtifactKind::Logistic => "logistic",
        };
        format!("{}({})", kind, self.weights.len())
    }

    fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        batch
            .iter()
            .map(|features| {
                if features.len() != self.weights.len() {
                    return Err(ClassifierError::ArityMismatch {
                        expected: self.weights.len(),
                        actual: features.len(),
                    });
                }
                if !features.is_finite() {
                    return Err(ClassifierError::NonFinite);
                }
                Ok(self.label(self.score(features.as_slice())))
            })
            .collect()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
