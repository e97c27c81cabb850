//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod models;
mod output;
mod tui;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;

use serde::{Deserialize, Serialize};
use trihealth_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model artifact locations
    pub models: FileModelsConfig,
    /// One-shot output settings
    pub output: FileOutputConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Empty paths are errors. Values that still work but are probably
    /// unintended are warnings.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.models.validate();
        issues.extend(self.tui.validate());
        issues
    }
}
