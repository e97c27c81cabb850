//! Output format value object

use serde::{Deserialize, Serialize};

/// How a prediction report is printed in one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Result card with title, message and tip (default)
    Card,
    /// Single line: condition and outcome title
    Brief,
    /// JSON report including the assembled feature vector
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Card
    }
}
