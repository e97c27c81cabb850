//! Presentation-level configuration
//!
//! Resolved settings for one-shot output and the TUI.

use std::time::Duration;
use trihealth_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl OutputConfig {
    /// Apply the color setting to all `colored` output in this process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Card,
            color: true,
        }
    }
}

/// TUI configuration for the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct TuiConfig {
    /// Redraw interval when no input arrives
    pub tick_rate: Duration,
    /// Show the assembled feature vector under the result card
    pub show_features: bool,
    /// How long flash messages stay in the status bar
    pub flash_duration: Duration,
}

impl TuiConfig {
    /// Build from raw settings; a zero tick rate becomes 1ms
    pub fn new(tick_rate_ms: u64, show_features: bool, flash_seconds: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            show_features,
            flash_duration: Duration::from_secs(flash_seconds),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self::new(250, false, 4)
    }
}
