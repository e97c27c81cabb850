//! Run Prediction use case
//!
//! The prediction dispatcher: assemble → predict (single-element batch) →
//! map the label to its payload.

use crate::context::ModelContext;
use crate::ports::classifier::ClassifierError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};
use trihealth_domain::{
    Condition, DomainError, FeatureAssembler, FeatureVector, FormInput, PredictionLabel,
    PredictionOutcome, PredictionReport,
};

/// Errors caused by the request itself (bad or mismatched input)
#[derive(Error, Debug)]
pub enum RunPredictionError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),
}

/// Input for the RunPrediction use case
#[derive(Debug, Clone)]
pub struct RunPredictionInput {
    pub condition: Condition,
    pub form: FormInput,
}

impl RunPredictionInput {
    pub fn new(form: FormInput) -> Self {
        Self {
            condition: form.condition(),
            form,
        }
    }

    /// Input with every field at its default
    pub fn defaults(condition: Condition) -> Self {
        Self::new(FormInput::defaults(condition))
    }
}

/// Use case for a single, stateless prediction
#[derive(Clone)]
pub struct RunPredictionUseCase {
    context: Arc<ModelContext>,
}

impl RunPredictionUseCase {
    pub fn new(context: Arc<ModelContext>) -> Self {
        Self { context }
    }

    /// Execute the use case.
    ///
    /// Classifier failures do not produce an `Err`: they come back as
    /// [`PredictionOutcome::Unavailable`] so the surface can show them.
    pub fn execute(&self, input: RunPredictionInput) -> Result<PredictionReport, RunPredictionError> {
        let schema = trihealth_domain::FeatureSchema::for_condition(input.condition);
        let features = FeatureAssembler::assemble_with(schema, &input.form)?;
        trace!("Assembled {} vector: {:?}", input.condition, features.as_slice());

        let outcome = match self.classify(input.condition, &features) {
            Ok(label) => {
                debug!("{} prediction: {}", input.condition, label);
                PredictionOutcome::resolved(input.condition, label)
            }
            Err(e) => {
                warn!("{} prediction unavailable: {}", input.condition, e);
                PredictionOutcome::unavailable(e.to_string())
            }
        };

        Ok(PredictionReport::new(input.condition, features, outcome))
    }

    /// Call the classifier with a one-element batch and read its only label
    fn classify(
        &self,
        condition: Condition,
        features: &FeatureVector,
    ) -> Result<PredictionLabel, ClassifierError> {
        let classifier = self.context.classifier(condition);
        let labels = classifier.predict(std::slice::from_ref(features))?;
        let raw = labels.first().copied().ok_or(ClassifierError::EmptyResult)?;
        Ok(PredictionLabel::try_from(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier::Classifier;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Returns a fixed raw label and records every vector it sees
    struct ScriptedClassifier {
        arity: usize,
        label: i64,
        seen: Mutex<Vec<Vec<f64>>>,
    }

    impl ScriptedClassifier {
        fn new(arity: usize, label: i64) -> Self {
            Self {
                arity,
                label,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Classifier for ScriptedClassifier {
        fn arity(&self) -> usize {
            self.arity
        }

        fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
            let mut seen = self.seen.lock().unwrap();
            for v in batch {
                if v.len() != self.arity {
                    return Err(ClassifierError::ArityMismatch {
                        expected: self.arity,
                        actual: v.len(),
                    });
                }
                seen.push(v.as_slice().to_vec());
            }
            Ok(vec![self.label; batch.len()])
        }
    }

    /// Sign of the first feature minus a threshold
    struct ThresholdClassifier {
        arity: usize,
        threshold: f64,
    }

    impl Classifier for ThresholdClassifier {
        fn arity(&self) -> usize {
            self.arity
        }

        fn predict(&self, batch: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
            Ok(batch
                .iter()
                .map(|v| i64::from(v.as_slice()[0] > self.threshold))
                .collect())
        }
    }

    struct EmptyClassifier;

    impl Classifier for EmptyClassifier {
        fn arity(&self) -> usize {
            22
        }

        fn predict(&self, _batch: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
            Ok(vec![])
        }
    }

    fn context_with(
        diabetes: Arc<dyn Classifier>,
        heart: Arc<dyn Classifier>,
        parkinsons: Arc<dyn Classifier>,
    ) -> Arc<ModelContext> {
        Arc::new(ModelContext::new(diabetes, heart, parkinsons))
    }

    // ==================== Tests ====================

    #[test]
    fn test_diabetes_vector_forwarded_unmodified() {
        let diabetes = Arc::new(ScriptedClassifier::new(8, 0));
        let use_case = RunPredictionUseCase::new(context_with(
            diabetes.clone(),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let report = use_case
            .execute(RunPredictionInput::defaults(Condition::Diabetes))
            .unwrap();

        assert_eq!(
            *diabetes.seen.lock().unwrap(),
            vec![vec![1.0, 100.0, 80.0, 20.0, 50.0, 25.0, 0.5, 30.0]]
        );
        assert_eq!(report.outcome.label(), Some(PredictionLabel::Negative));
        assert_eq!(report.outcome.payload().unwrap().title, "No Diabetes");
    }

    #[test]
    fn test_heart_positive_payload() {
        let heart = Arc::new(ScriptedClassifier::new(13, 1));
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 0)),
            heart.clone(),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let form = FormInput::defaults(Condition::HeartDisease)
            .with("sex", "Female")
            .unwrap();
        let report = use_case.execute(RunPredictionInput::new(form)).unwrap();

        assert_eq!(
            heart.seen.lock().unwrap()[0],
            vec![50.0, 0.0, 0.0, 120.0, 200.0, 0.0, 0.0, 150.0, 0.0, 1.0, 0.0, 1.0, 0.0]
        );
        let payload = report.outcome.payload().unwrap();
        assert_eq!(payload.title, "Heart Disease Detected");
        assert!(payload.severe);
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ThresholdClassifier {
                arity: 8,
                threshold: 0.5,
            }),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let first = use_case
            .execute(RunPredictionInput::defaults(Condition::Diabetes))
            .unwrap();
        let second = use_case
            .execute(RunPredictionInput::defaults(Condition::Diabetes))
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.outcome.label(), Some(PredictionLabel::Positive));
    }

    #[test]
    fn test_classifier_error_becomes_unavailable() {
        // Parkinson's slot wired to a 13-feature model: every call mismatches
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 0)),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(13, 0)),
        ));

        let report = use_case
            .execute(RunPredictionInput::defaults(Condition::Parkinsons))
            .unwrap();

        match &report.outcome {
            PredictionOutcome::Unavailable { reason } => {
                assert!(reason.contains("22 values"), "reason: {reason}");
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
        assert_eq!(report.features.len(), 22);
    }

    #[test]
    fn test_out_of_set_label_becomes_unavailable() {
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 2)),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let features = FeatureVector::new(vec![0.0; 8]);
        assert_eq!(
            use_case.classify(Condition::Diabetes, &features),
            Err(ClassifierError::InvalidLabel(DomainError::InvalidLabel(2)))
        );

        let report = use_case
            .execute(RunPredictionInput::defaults(Condition::Diabetes))
            .unwrap();

        assert_eq!(
            report.outcome,
            PredictionOutcome::unavailable("Classifier returned label 2, expected 0 or 1")
        );
    }

    #[test]
    fn test_empty_result_becomes_unavailable() {
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 0)),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(EmptyClassifier),
        ));

        let report = use_case
            .execute(RunPredictionInput::defaults(Condition::Parkinsons))
            .unwrap();

        assert_eq!(
            report.outcome,
            PredictionOutcome::unavailable("Classifier returned no labels")
        );
    }

    #[test]
    fn test_incomplete_form_is_an_input_error() {
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 0)),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let err = use_case
            .execute(RunPredictionInput::new(FormInput::empty(Condition::Diabetes)))
            .unwrap_err();

        assert!(matches!(
            err,
            RunPredictionError::InvalidInput(DomainError::MissingField(_))
        ));
    }

    #[test]
    fn test_condition_mismatch_is_an_input_error() {
        let use_case = RunPredictionUseCase::new(context_with(
            Arc::new(ScriptedClassifier::new(8, 0)),
            Arc::new(ScriptedClassifier::new(13, 0)),
            Arc::new(ScriptedClassifier::new(22, 0)),
        ));

        let input = RunPredictionInput {
            condition: Condition::HeartDisease,
            form: FormInput::defaults(Condition::Diabetes),
        };
        let err = use_case.execute(input).unwrap_err();

        assert!(matches!(
            err,
            RunPredictionError::InvalidInput(DomainError::ConditionMismatch { .. })
        ));
    }
}
