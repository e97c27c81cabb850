//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    #[error("Unknown field '{field}' for {condition}")]
    UnknownField { condition: String, field: String },

    #[error("Missing value for field '{0}'")]
    MissingField(String),

    #[error("{field}: {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: expected a whole number, got {value}")]
    NotAnInteger { field: String, value: f64 },

    #[error("{field}: {value} is not one of {options:?}")]
    InvalidChoice {
        field: String,
        value: f64,
        options: Vec<i64>,
    },

    #[error("{field}: '{value}' is not one of {options:?}")]
    InvalidCategory {
        field: String,
        value: String,
        options: Vec<String>,
    },

    #[error("{field}: '{value}' is not a number")]
    NotANumber { field: String, value: String },

    #[error("Input was built for {actual}, expected {expected}")]
    ConditionMismatch { expected: String, actual: String },

    #[error("Classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = DomainError::OutOfRange {
            field: "Age".to_string(),
            value: 120.0,
            min: 1.0,
            max: 100.0,
        };
        assert_eq!(
            error.to_string(),
            "Age: 120 is outside the allowed range [1, 100]"
        );
    }
}
