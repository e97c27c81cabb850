//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};
use trihealth_domain::{ConfigIssue, ConfigIssueCode};

/// TUI configuration
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_rate_ms = 250
/// show_features = true
/// flash_seconds = 4
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval when no input arrives
    pub tick_rate_ms: u64,
    /// Show the assembled feature vector under the result card
    pub show_features: bool,
    /// How long status bar messages stay visible
    pub flash_seconds: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            show_features: false,
            flash_seconds: 4,
        }
    }
}

impl FileTuiConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.tick_rate_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "tui.tick_rate_ms".to_string(),
                },
                "tui.tick_rate_ms: 0 redraws continuously, using 1",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_config_default() {
        let config = FileTuiConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert!(!config.show_features);
        assert_eq!(config.flash_seconds, 4);
    }

    #[test]
    fn test_tui_config_partial() {
        let toml_str = r#"
[tui]
show_features = true
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.tui.show_features);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_zero_tick_rate_is_a_warning() {
        let config = FileTuiConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
