//! Console output formatter for predictions and session messages

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use sentiment_application::ClientError;
use sentiment_domain::{OutputFormat, PredictionResult, UserInfo};

/// Formats results for console display
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// `Label (Confidence: 0.87)`
    pub fn result_line(result: &PredictionResult) -> String {
        format!("{} (Confidence: {:.2})", result.label, result.confidence)
    }

    /// Format a prediction as a colored result box
    pub fn format_pretty(result: &PredictionResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Sentiment Analysis Result"));
        output.push('\n');

        let line = format!("  {}  ", Self::result_line(result));
        let width = line.chars().count();
        let padding = " ".repeat(width);
        let (pad, body) = if result.is_positive() {
            (padding.on_green(), line.white().bold().on_green())
        } else {
            (padding.on_red(), line.white().bold().on_red())
        };
        output.push_str(&format!("{}\n{}\n{}\n", pad, body, pad));

        output
    }

    /// Format a prediction as a single uncolored line
    pub fn format_plain(result: &PredictionResult) -> String {
        Self::result_line(result)
    }

    /// Format as JSON
    pub fn format_json(result: &PredictionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the user-info banner
    pub fn format_user(&self, user: &UserInfo) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(user).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Plain => format!("Logged in as: {}", user.username),
            OutputFormat::Pretty => {
                format!("{} {}", "Logged in as:".cyan().bold(), user.username.bold())
            }
        }
    }

    pub fn format_success(message: &str) -> String {
        format!("{} {}", "v".green(), message.green())
    }

    /// Format a client error as an inline message
    ///
    /// Precondition failures (not logged in, empty review) are warnings;
    /// everything that reached the service is an error.
    pub fn format_error(error: &ClientError) -> String {
        if error.is_precondition() {
            format!("{} {}", "!".yellow().bold(), error.to_string().yellow())
        } else {
            format!("{} {}", "x".red().bold(), error.to_string().red())
        }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_prediction(&self, result: &PredictionResult) -> String {
        match self.format {
            OutputFormat::Pretty => Self::format_pretty(result),
            OutputFormat::Plain => Self::format_plain(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive() -> PredictionResult {
        PredictionResult::new("Positive", 0.87)
    }

    #[test]
    fn test_result_line_two_decimals() {
        assert_eq!(
            ConsoleFormatter::result_line(&positive()),
            "Positive (Confidence: 0.87)"
        );
        assert_eq!(
            ConsoleFormatter::result_line(&PredictionResult::new("Negative", 0.123456)),
            "Negative (Confidence: 0.12)"
        );
    }

    #[test]
    fn test_plain_format() {
        let formatter = ConsoleFormatter::new(OutputFormat::Plain);
        assert_eq!(
            formatter.format_prediction(&PredictionResult::from_parts(None, None)),
            "Unknown (Confidence: 0.00)"
        );
    }

    #[test]
    fn test_pretty_format_contains_result() {
        let formatter = ConsoleFormatter::new(OutputFormat::Pretty);
        let output = formatter.format_prediction(&positive());
        assert!(output.contains("Sentiment Analysis Result"));
        assert!(output.contains("Positive (Confidence: 0.87)"));
    }

    #[test]
    fn test_json_format() {
        let formatter = ConsoleFormatter::new(OutputFormat::Json);
        let output = formatter.format_prediction(&positive());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["label"], "Positive");
        assert_eq!(value["confidence"], 0.87);
    }

    #[test]
    fn test_format_user_plain() {
        let formatter = ConsoleFormatter::new(OutputFormat::Plain);
        assert_eq!(
            formatter.format_user(&UserInfo::new("alice")),
            "Logged in as: alice"
        );
    }

    #[test]
    fn test_format_error_mentions_message() {
        let output = ConsoleFormatter::format_error(&ClientError::NotAuthenticated);
        assert!(output.contains("Please log in"));

        let output = ConsoleFormatter::format_error(&ClientError::Prediction("HTTP 500".into()));
        assert!(output.contains("An error occurred with the prediction request: HTTP 500"));
    }
}
