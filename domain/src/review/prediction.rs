//! Prediction value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder label shown when the service omits the `sentiment` field
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Categorical output of the sentiment model
///
/// The service is known to return `"Positive"` and `"Negative"`; anything else
/// is kept verbatim in [`SentimentLabel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Other(String),
}

impl SentimentLabel {
    /// Label used when the response carries no sentiment
    pub fn unknown() -> Self {
        SentimentLabel::Other(UNKNOWN_LABEL.to_string())
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, SentimentLabel::Positive)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Other(label) => label,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Positive" => SentimentLabel::Positive,
            "Negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Other(label),
        }
    }
}

impl From<&str> for SentimentLabel {
    fn from(label: &str) -> Self {
        SentimentLabel::from(label.to_string())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one review (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: SentimentLabel,
    /// Model certainty in `[0, 1]`; `0.0` when the service omits it
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(label: impl Into<SentimentLabel>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Build a result from optional response fields, applying the
    /// `"Unknown"` / `0.0` defaults for anything missing.
    pub fn from_parts(label: Option<String>, confidence: Option<f64>) -> Self {
        Self {
            label: label.map(SentimentLabel::from).unwrap_or_else(SentimentLabel::unknown),
            confidence: confidence.unwrap_or(0.0),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.label.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_service_string() {
        assert_eq!(SentimentLabel::from("Positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("Negative"), SentimentLabel::Negative);
        assert_eq!(
            SentimentLabel::from("positive"),
            SentimentLabel::Other("positive".to_string())
        );
    }

    #[test]
    fn test_label_display_is_verbatim() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::from("Mixed").to_string(), "Mixed");
        assert_eq!(SentimentLabel::unknown().to_string(), "Unknown");
    }

    #[test]
    fn test_from_parts_defaults() {
        let result = PredictionResult::from_parts(None, None);
        assert_eq!(result.label, SentimentLabel::unknown());
        assert_eq!(result.confidence, 0.0);
        assert!(!result.is_positive());
    }

    #[test]
    fn test_from_parts_full() {
        let result = PredictionResult::from_parts(Some("Positive".to_string()), Some(0.87));
        assert_eq!(result, PredictionResult::new("Positive", 0.87));
        assert!(result.is_positive());
    }

    #[test]
    fn test_serialize_label_as_string() {
        let json = serde_json::to_value(PredictionResult::new("Negative", 0.4)).unwrap();
        assert_eq!(json["label"], "Negative");
        assert_eq!(json["confidence"], 0.4);
    }
}
