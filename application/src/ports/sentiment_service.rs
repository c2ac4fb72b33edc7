//! Sentiment service port
//!
//! Defines the interface for the remote authentication and prediction service.

use async_trait::async_trait;
use sentiment_domain::{AccessToken, Credentials, PredictionResult, ReviewText, UserInfo};
use thiserror::Error;

/// Errors that can occur when talking to the sentiment service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Transport-level failure: unreachable host, timeout, DNS
    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered with a non-200 status
    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },

    /// The service answered 200 but the body could not be used
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ServiceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, ServiceError::Connection(_))
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

/// Gateway to the remote sentiment service
///
/// Every authenticated call takes the token explicitly, so a request without
/// a bearer credential cannot be expressed through this port.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SentimentService: Send + Sync {
    /// Exchange credentials for an access token (`POST /token`)
    async fn exchange_token(&self, credentials: &Credentials) -> Result<AccessToken, ServiceError>;

    /// Look up the user the token belongs to (`GET /users/me/`)
    async fn fetch_user_info(&self, token: &AccessToken) -> Result<UserInfo, ServiceError>;

    /// Classify a review (`POST /predict`)
    async fn predict(
        &self,
        token: &AccessToken,
        review: &ReviewText,
    ) -> Result<PredictionResult, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = ServiceError::Status {
            status: 401,
            body: String::new(),
        };
        assert_eq!(error.to_string(), "HTTP 401");

        let error = ServiceError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn test_is_unauthorized() {
        let unauthorized = ServiceError::Status {
            status: 401,
            body: String::new(),
        };
        let forbidden = ServiceError::Status {
            status: 403,
            body: String::new(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ServiceError::Connection("refused".to_string()).is_unauthorized());
    }

    #[test]
    fn test_is_connection() {
        assert!(ServiceError::Connection("dns".to_string()).is_connection());
        assert!(!ServiceError::InvalidResponse("eof".to_string()).is_connection());
    }
}
