//! Fixed outcome payloads, two per condition

use super::label::PredictionLabel;
use crate::core::condition::Condition;
use serde::Serialize;

/// Display bundle selected by a label (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomePayload {
    pub title: &'static str,
    pub message: &'static str,
    /// Condition detected; drives the warning styling
    pub severe: bool,
    pub tip: &'static str,
}

const DIABETES_POSITIVE: OutcomePayload = OutcomePayload {
    title: "Diabetes Detected",
    message: "Consult a doctor and follow a healthy lifestyle.",
    severe: true,
    tip: "Eat low-sugar foods, exercise regularly, and monitor blood glucose levels.",
};

const DIABETES_NEGATIVE: OutcomePayload = OutcomePayload {
    title: "No Diabetes",
    message: "Maintain a balanced diet and regular exercise.",
    severe: false,
    tip: "Keep a healthy lifestyle to prevent diabetes.",
};

const HEART_POSITIVE: OutcomePayload = OutcomePayload {
    title: "Heart Disease Detected",
    message: "Immediate consultation is recommended.",
    severe: true,
    tip: "Avoid smoking, maintain healthy weight, exercise regularly, and monitor cholesterol.",
};

const HEART_NEGATIVE: OutcomePayload = OutcomePayload {
    title: "Heart is Healthy",
    message: "Maintain a heart-healthy lifestyle.",
    severe: false,
    tip: "Eat balanced diet and keep active to maintain heart health.",
};

const PARKINSONS_POSITIVE: OutcomePayload = OutcomePayload {
    title: "Parkinson's Detected",
    message: "Consult a neurologist for further guidance.",
    severe: true,
    tip: "Regular exercise and early diagnosis can improve quality of life.",
};

const PARKINSONS_NEGATIVE: OutcomePayload = OutcomePayload {
    title: "No Parkinson's Detected",
    message: "Maintain a healthy lifestyle.",
    severe: false,
    tip: "Maintain healthy habits and monitor symptoms regularly.",
};

impl OutcomePayload {
    /// The payload for a condition and label. Total over both inputs.
    pub fn select(condition: Condition, label: PredictionLabel) -> &'static OutcomePayload {
        match (condition, label) {
            (Condition::Diabetes, PredictionLabel::Positive) => &DIABETES_POSITIVE,
            (Condition::Diabetes, PredictionLabel::Negative) => &DIABETES_NEGATIVE,
            (Condition::HeartDisease, PredictionLabel::Positive) => &HEART_POSITIVE,
            (Condition::HeartDisease, PredictionLabel::Negative) => &HEART_NEGATIVE,
            (Condition::Parkinsons, PredictionLabel::Positive) => &PARKINSONS_POSITIVE,
            (Condition::Parkinsons, PredictionLabel::Negative) => &PARKINSONS_NEGATIVE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_label() {
        for condition in Condition::ALL {
            assert!(OutcomePayload::select(condition, PredictionLabel::Positive).severe);
            assert!(!OutcomePayload::select(condition, PredictionLabel::Negative).severe);
        }
    }

    #[test]
    fn test_payloads_are_distinct_per_condition() {
        for condition in Condition::ALL {
            let pos = OutcomePayload::select(condition, PredictionLabel::Positive);
            let neg = OutcomePayload::select(condition, PredictionLabel::Negative);
            assert_ne!(pos.title, neg.title);
        }
    }

    #[test]
    fn test_heart_payload_text() {
        let payload = OutcomePayload::select(Condition::HeartDisease, PredictionLabel::Negative);
        assert_eq!(payload.title, "Heart is Healthy");
        assert_eq!(payload.message, "Maintain a heart-healthy lifestyle.");
    }
}
