//! Model artifact locations from TOML (`[models]` section)

use crate::models::DEFAULT_MODELS_DIR;
use serde::{Deserialize, Serialize};
use trihealth_domain::{ConfigIssue, ConfigIssueCode, Condition};

/// Model artifact locations
///
/// # Example
///
/// ```toml
/// [models]
/// dir = "saved_models"
/// heart_disease = "heart_v2.json"   # relative to dir, or absolute
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Directory holding the artifacts
    pub dir: String,
    /// Override for the diabetes artifact file
    pub diabetes: Option<String>,
    /// Override for the heart disease artifact file
    pub heart_disease: Option<String>,
    /// Override for the Parkinson's artifact file
    pub parkinsons: Option<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_MODELS_DIR.to_string(),
            diabetes: None,
            heart_disease: None,
            parkinsons: None,
        }
    }
}

impl FileModelsConfig {
    /// Configured file override for a condition
    pub fn file_for(&self, condition: Condition) -> Option<&str> {
        match condition {
            Condition::Diabetes => self.diabetes.as_deref(),
            Condition::HeartDisease => self.heart_disease.as_deref(),
            Condition::Parkinsons => self.parkinsons.as_deref(),
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.dir.trim().is_empty() {
            issues.push(empty("models.dir"));
        }

        for (key, value) in [
            ("models.diabetes", &self.diabetes),
            ("models.heart_disease", &self.heart_disease),
            ("models.parkinsons", &self.parkinsons),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                issues.push(empty(key));
            }
        }

        issues
    }
}

fn empty(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::EmptyValue {
            field: field.to_string(),
        },
        format!("{}: value cannot be empty", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_config_defaults() {
        let config = FileModelsConfig::default();
        assert_eq!(config.dir, "saved_models");
        let store = crate::models::FileModelStore::new(&config.dir);
        for condition in Condition::ALL {
            assert!(config.file_for(condition).is_none());
            assert_eq!(
                store.path_for(condition),
                crate::models::FileModelStore::default().path_for(condition)
            );
        }
    }

    #[test]
    fn test_models_config_deserialize() {
        let toml_str = r#"
[models]
dir = "/opt/tri-health/models"
heart_disease = "heart_v2.json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.dir, "/opt/tri-health/models");
        assert_eq!(
            config.models.file_for(Condition::HeartDisease),
            Some("heart_v2.json")
        );
        assert!(config.models.file_for(Condition::Diabetes).is_none());
    }

    #[test]
    fn test_validate_empty_file_name() {
        let toml_str = r#"
[models]
parkinsons = "  "
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.is_error()
            && matches!(
                &i.code,
                ConfigIssueCode::EmptyValue { field } if field == "models.parkinsons"
            )));
    }
}
