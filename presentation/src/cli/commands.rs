//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use trihealth_domain::Condition;

/// Output format for one-shot predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Result card with title, message and tip
    Card,
    /// One line per prediction
    Brief,
    /// JSON report including the assembled feature vector
    Json,
}

impl From<OutputFormat> for trihealth_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Card => Self::Card,
            OutputFormat::Brief => Self::Brief,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for tri-health
#[derive(Parser, Debug)]
#[command(name = "tri-health")]
#[command(
    author,
    version,
    about = "Diabetes, heart disease and Parkinson's screening with pre-trained models"
)]
#[command(long_about = r#"
Tri Health runs three pre-trained binary classifiers over values you enter:
diabetes (8 features), heart disease (13) and Parkinson's disease (22).

Without a condition it opens the interactive terminal UI. With a condition
it predicts once from the default values plus any --set overrides.

Models are read from ./saved_models unless configured otherwise.
Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./tri-health.toml      Project-level config
3. ~/.config/tri-health/config.toml   Global config

Example:
  tri-health
  tri-health diabetes --set Glucose=148 --set BMI=33.6 --set Age=50
  tri-health heart-disease --set sex=Female -o json
  tri-health parkinsons --list-fields
"#)]
pub struct Cli {
    /// Condition to predict (diabetes, heart-disease, parkinsons); omit for the TUI
    pub condition: Option<Condition>,

    /// Field value, as NAME=VALUE (can be specified multiple times)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Output format (defaults to the configured format, then card)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory containing the model artifacts
    #[arg(long, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    /// List the input fields for the condition (or all conditions) and exit
    #[arg(long)]
    pub list_fields: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether this invocation opens the interactive UI
    pub fn is_interactive(&self) -> bool {
        self.condition.is_none() && !self.list_fields && !self.show_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_opens_tui() {
        let cli = Cli::try_parse_from(["tri-health"]).unwrap();
        assert!(cli.condition.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_one_shot_arguments() {
        let cli = Cli::try_parse_from([
            "tri-health",
            "heart",
            "--set",
            "sex=Female",
            "-s",
            "age=61",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.condition, Some(Condition::HeartDisease));
        assert_eq!(cli.set, vec!["sex=Female", "age=61"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_unknown_condition_is_rejected() {
        assert!(Cli::try_parse_from(["tri-health", "asthma"]).is_err());
    }

    #[test]
    fn test_list_fields_without_condition_is_not_interactive() {
        let cli = Cli::try_parse_from(["tri-health", "--list-fields"]).unwrap();
        assert!(!cli.is_interactive());
    }
}
