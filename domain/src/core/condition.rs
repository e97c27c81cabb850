//! Condition value object representing one screening target

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A condition that has a pre-trained classifier (Value Object)
///
/// Each condition owns exactly one classifier, one feature schema
/// and two outcome payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Condition {
    /// Every condition, in tab order
    pub const ALL: [Condition; 3] = [
        Condition::Diabetes,
        Condition::HeartDisease,
        Condition::Parkinsons,
    ];

    /// Stable identifier used on the command line and in artifacts
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::HeartDisease => "heart-disease",
            Condition::Parkinsons => "parkinsons",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::HeartDisease => "Heart Disease",
            Condition::Parkinsons => "Parkinson's Disease",
        }
    }

    /// File stem of the serialized model for this condition
    pub fn artifact_stem(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes_model",
            Condition::HeartDisease => "heart_disease_model",
            Condition::Parkinsons => "parkinsons_model",
        }
    }

    /// Number of features the classifier was trained on
    pub fn arity(&self) -> usize {
        match self {
            Condition::Diabetes => 8,
            Condition::HeartDisease => 13,
            Condition::Parkinsons => 22,
        }
    }

    /// Position in [`Condition::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Condition::Diabetes => 0,
            Condition::HeartDisease => 1,
            Condition::Parkinsons => 2,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Condition {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "diabetes" => Ok(Condition::Diabetes),
            "heart-disease" | "heart" => Ok(Condition::HeartDisease),
            "parkinsons" | "parkinson" => Ok(Condition::Parkinsons),
            other => Err(crate::core::error::DomainError::UnknownCondition(
                other.to_string(),
            )),
        }
    }
}

impl Serialize for Condition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_roundtrip() {
        for condition in Condition::ALL {
            let parsed: Condition = condition.to_string().parse().unwrap();
            assert_eq!(condition, parsed);
        }
    }

    #[test]
    fn test_condition_aliases() {
        assert_eq!("heart".parse::<Condition>().unwrap(), Condition::HeartDisease);
        assert_eq!(
            "Heart_Disease".parse::<Condition>().unwrap(),
            Condition::HeartDisease
        );
        assert_eq!("parkinson".parse::<Condition>().unwrap(), Condition::Parkinsons);
        assert!("kidney".parse::<Condition>().is_err());
    }

    #[test]
    fn test_condition_arity() {
        assert_eq!(Condition::Diabetes.arity(), 8);
        assert_eq!(Condition::HeartDisease.arity(), 13);
        assert_eq!(Condition::Parkinsons.arity(), 22);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, condition) in Condition::ALL.iter().enumerate() {
            assert_eq!(condition.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_stable_id() {
        let json = serde_json::to_string(&Condition::HeartDisease).unwrap();
        assert_eq!(json, "\"heart-disease\"");
        let parsed: Condition = serde_json::from_str("\"parkinsons\"").unwrap();
        assert_eq!(parsed, Condition::Parkinsons);
    }
}
