//! Console output formatter for prediction reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use tracing::warn;
use trihealth_domain::{Condition, FeatureSchema, PredictionOutcome, PredictionReport};

/// Formats prediction reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the result card: title, message and tip
    pub fn format_card(report: &PredictionReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "{} Prediction",
            report.condition.display_name()
        )));
        output.push('\n');

        match &report.outcome {
            PredictionOutcome::Resolved { payload, .. } => {
                let title = if payload.severe {
                    format!("[!] {}", payload.title).red().bold()
                } else {
                    format!("[ok] {}", payload.title).green().bold()
                };
                output.push_str(&format!("{}\n{}\n\n", title, payload.message));
                output.push_str(&format!("{} {}\n", "Tip:".cyan().bold(), payload.tip));
            }
            PredictionOutcome::Unavailable { reason } => {
                output.push_str(&format!(
                    "{}\n{}\n",
                    "[?] Prediction unavailable".yellow().bold(),
                    reason
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as a single line, e.g. `diabetes: No Diabetes`
    pub fn format_brief(report: &PredictionReport) -> String {
        match &report.outcome {
            PredictionOutcome::Resolved { payload, .. } => {
                format!("{}: {}", report.condition, payload.title)
            }
            PredictionOutcome::Unavailable { reason } => {
                format!("{}: unavailable ({})", report.condition, reason)
            }
        }
    }

    /// Format as JSON
    ///
    /// A serialization failure is logged and rendered as an `error` object.
    pub fn format_json(report: &PredictionReport) -> String {
        match serde_json::to_string_pretty(report) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize {} report: {}", report.condition, e);
                serde_json::json!({
                    "condition": report.condition,
                    "error": e.to_string(),
                })
                .to_string()
            }
        }
    }

    /// List the input fields of one condition
    pub fn format_schema(condition: Condition) -> String {
        let schema = FeatureSchema::for_condition(condition);
        let mut output = format!(
            "{} ({} features)\n",
            format!("{} Prediction", condition.display_name()).cyan().bold(),
            schema.arity()
        );

        let name_width = schema
            .fields()
            .iter()
            .map(|f| f.name.len())
            .max()
            .unwrap_or(0);

        for (i, field) in schema.fields().iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. {:<width$}  {:<32}  {}  (default {})\n",
                i + 1,
                field.name,
                field.label,
                field.domain_hint(),
                field.format_value(&field.default_value()),
                width = name_width
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(50);
        format!(
            "\n{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(50).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_card(&self, report: &PredictionReport) -> String {
        Self::format_card(report)
    }

    fn format_brief(&self, report: &PredictionReport) -> String {
        Self::format_brief(report)
    }

    fn format_json(&self, report: &PredictionReport) -> String {
        Self::format_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trihealth_domain::{FeatureVector, OutputFormat, PredictionLabel};

    fn report(condition: Condition, outcome: PredictionOutcome) -> PredictionReport {
        let features = FeatureVector::new(vec![0.0; condition.arity()]);
        PredictionReport::new(condition, features, outcome)
    }

    #[test]
    fn test_card_contains_payload_text() {
        let r = report(
            Condition::HeartDisease,
            PredictionOutcome::resolved(Condition::HeartDisease, PredictionLabel::Positive),
        );
        let card = ConsoleFormatter::format_card(&r);
        assert!(card.contains("Heart Disease Prediction"));
        assert!(card.contains("Heart Disease Detected"));
        assert!(card.contains("Immediate consultation is recommended."));
        assert!(card.contains("monitor cholesterol"));
    }

    #[test]
    fn test_card_for_unavailable() {
        let r = report(
            Condition::Parkinsons,
            PredictionOutcome::unavailable("Feature vector has 22 values, model expects 13"),
        );
        let card = ConsoleFormatter::format_card(&r);
        assert!(card.contains("Prediction unavailable"));
        assert!(card.contains("model expects 13"));
        assert!(!card.contains("Tip:"));
    }

    #[test]
    fn test_brief() {
        let r = report(
            Condition::Diabetes,
            PredictionOutcome::resolved(Condition::Diabetes, PredictionLabel::Negative),
        );
        assert_eq!(ConsoleFormatter::format_brief(&r), "diabetes: No Diabetes");
    }

    #[test]
    fn test_json_includes_features_and_status() {
        let r = report(
            Condition::Diabetes,
            PredictionOutcome::resolved(Condition::Diabetes, PredictionLabel::Positive),
        );
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&r)).unwrap();
        assert_eq!(json["condition"], "diabetes");
        assert_eq!(json["outcome"]["status"], "resolved");
        assert_eq!(json["outcome"]["title"], "Diabetes Detected");
        assert_eq!(json["features"].as_array().unwrap().len(), 8);
        assert_eq!(json["feature_names"][1], "Glucose");
    }

    #[test]
    fn test_json_keeps_report_with_non_finite_feature() {
        let mut values = vec![0.0; Condition::Diabetes.arity()];
        values[0] = f64::NAN;
        let r = PredictionReport::new(
            Condition::Diabetes,
            FeatureVector::new(values),
            PredictionOutcome::unavailable("Feature vector contains non-finite values"),
        );
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&r)).unwrap();
        assert_eq!(json["condition"], "diabetes");
        assert!(json["features"][0].is_null());
        assert_eq!(json["outcome"]["status"], "unavailable");
    }

    #[test]
    fn test_trait_dispatch_by_format() {
        let r = report(
            Condition::Parkinsons,
            PredictionOutcome::resolved(Condition::Parkinsons, PredictionLabel::Negative),
        );
        let formatter = ConsoleFormatter;
        assert_eq!(
            formatter.format(&r, OutputFormat::Brief),
            "parkinsons: No Parkinson's Detected"
        );
    }

    #[test]
    fn test_schema_listing() {
        let listing = ConsoleFormatter::format_schema(Condition::HeartDisease);
        assert!(listing.contains("13 features"));
        assert!(listing.contains("Male | Female"));
        assert!(listing.contains("thalach"));
    }
}
