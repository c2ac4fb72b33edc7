//! Output formatter trait

use sentiment_domain::PredictionResult;

/// Trait for formatting prediction results
pub trait OutputFormatter {
    /// Format a prediction in the formatter's configured style
    fn format_prediction(&self, result: &PredictionResult) -> String;
}
