//! Presentation layer for tri-health
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive terminal UI.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::assignments::{AssignmentError, build_form, parse_assignment};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, TuiConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
pub use tui::TuiApp;
