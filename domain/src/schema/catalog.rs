//! Built-in feature schemas, one per condition.
//!
//! Field order here IS the classifier's training-time feature order.

use super::field::{CategoryOption, FieldKind, FieldSpec};

const fn integer(name: &'static str, label: &'static str, min: i64, max: i64, default: i64) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Integer { min, max, default })
}

const fn decimal(name: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> FieldSpec {
    FieldSpec::new(name, label, FieldKind::Decimal { min, max, default })
}

const fn choice(name: &'static str, label: &'static str, options: &'static [i64]) -> FieldSpec {
    FieldSpec::new(
        name,
        label,
        FieldKind::Choice {
            options,
            default: options[0],
        },
    )
}

const fn slider(name: &'static str, min: f64, max: f64) -> FieldSpec {
    FieldSpec::new(name, name, FieldKind::Slider { min, max })
}

pub(super) const DIABETES: [FieldSpec; 8] = [
    integer("Pregnancies", "Pregnancies", 0, 20, 1),
    decimal("Glucose", "Glucose Level (mg/dL)", 0.0, 200.0, 100.0),
    decimal("BloodPressure", "Blood Pressure (mmHg)", 0.0, 180.0, 80.0),
    decimal("SkinThickness", "Skin Thickness (mm)", 0.0, 100.0, 20.0),
    decimal("Insulin", "Insulin Level (IU/mL)", 0.0, 500.0, 50.0),
    decimal("BMI", "BMI", 10.0, 50.0, 25.0),
    decimal("DiabetesPedigreeFunction", "Pedigree Function", 0.0, 2.5, 0.5),
    integer("Age", "Age", 1, 100, 30),
];

const SEX_OPTIONS: [CategoryOption; 2] = [
    CategoryOption {
        label: "Male",
        code: 1.0,
    },
    CategoryOption {
        label: "Female",
        code: 0.0,
    },
];

pub(super) const HEART_DISEASE: [FieldSpec; 13] = [
    integer("age", "Age", 1, 100, 50),
    FieldSpec::new(
        "sex",
        "Sex",
        FieldKind::Category {
            options: &SEX_OPTIONS,
            default: 0,
        },
    ),
    choice("cp", "Chest Pain Type", &[0, 1, 2, 3]),
    integer("trestbps", "Resting BP (mmHg)", 80, 200, 120),
    integer("chol", "Cholesterol (mg/dL)", 100, 400, 200),
    choice("fbs", "Fasting Blood Sugar > 120 mg/dL", &[0, 1]),
    choice("restecg", "Resting ECG", &[0, 1, 2]),
    integer("thalach", "Max Heart Rate", 60, 220, 150),
    choice("exang", "Exercise Induced Angina", &[0, 1]),
    decimal("oldpeak", "ST Depression", 0.0, 6.0, 1.0),
    choice("slope", "Slope of Peak Exercise ST", &[0, 1, 2]),
    integer("ca", "Number of Major Vessels", 0, 4, 1),
    choice("thal", "Thalassemia Type", &[0, 1, 2, 3]),
];

pub(super) const PARKINSONS: [FieldSpec; 22] = [
    slider("MDVP:Fo(Hz)", 88.0, 260.0),
    slider("MDVP:Fhi(Hz)", 102.0, 592.0),
    slider("MDVP:Flo(Hz)", 65.0, 239.0),
    slider("MDVP:Jitter(%)", 0.0016, 0.033),
    slider("MDVP:Jitter(Abs)", 0.000007, 0.00026),
    slider("MDVP:RAP", 0.00068, 0.0214),
    slider("MDVP:PPQ", 0.00092, 0.0195),
    slider("Jitter:DDP", 0.00204, 0.0643),
    slider("MDVP:Shimmer", 0.00954, 0.119),
    slider("MDVP:Shimmer(dB)", 0.085, 1.3),
    slider("Shimmer:APQ3", 0.00455, 0.056),
    slider("Shimmer:APQ5", 0.0057, 0.079),
    slider("MDVP:APQ", 0.00719, 0.137),
    slider("Shimmer:DDA", 0.0136, 0.169),
    slider("NHR", 0.00065, 0.315),
    slider("HNR", 8.44, 33.04),
    slider("RPDE", 0.256, 0.685),
    slider("DFA", 0.574, 0.825),
    slider("spread1", -7.96, -2.43),
    slider("spread2", 0.006, 0.450),
    slider("D2", 1.42, 3.67),
    slider("PPE", 0.044, 0.527),
];
