//! Output formatter trait

use trihealth_domain::{OutputFormat, PredictionReport};

/// Trait for formatting prediction reports
pub trait OutputFormatter {
    /// Format the full result card
    fn format_card(&self, report: &PredictionReport) -> String;

    /// Format as a single line
    fn format_brief(&self, report: &PredictionReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &PredictionReport) -> String;

    /// Format in the requested style
    fn format(&self, report: &PredictionReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Card => self.format_card(report),
            OutputFormat::Brief => self.format_brief(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
