//! Error types for the HTTP adapter

use thiserror::Error;

/// Result type alias for HTTP adapter setup
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur while building the HTTP adapter
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_display() {
        let error = HttpError::InvalidBaseUrl {
            url: "localhost".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid base URL 'localhost': relative URL without a base"
        );
    }
}
