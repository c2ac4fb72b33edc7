//! Progress notification port
//!
//! Defines the interface for reporting in-flight requests to the user.

use std::fmt;

/// The three remote calls the session client makes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Login,
    UserInfo,
    Predict,
}

impl RequestKind {
    /// Name of the remote service as shown in connectivity errors
    pub fn service_name(&self) -> &'static str {
        match self {
            RequestKind::Login => "authentication service",
            RequestKind::UserInfo => "user information service",
            RequestKind::Predict => "prediction service",
        }
    }

    /// Short message shown while the request is in flight
    pub fn activity(&self) -> &'static str {
        match self {
            RequestKind::Login => "Logging in...",
            RequestKind::UserInfo => "Fetching user information...",
            RequestKind::Predict => "Analyzing sentiment...",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Login => write!(f, "login"),
            RequestKind::UserInfo => write!(f, "user_info"),
            RequestKind::Predict => write!(f, "predict"),
        }
    }
}

/// Callback for request lifecycle updates
///
/// Implementations live in the presentation layer (spinner, plain text).
pub trait ProgressNotifier: Send + Sync {
    /// Called right before a request is sent
    fn on_request_start(&self, kind: RequestKind);

    /// Called once the request has completed, successfully or not
    fn on_request_complete(&self, kind: RequestKind, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _kind: RequestKind) {}
    fn on_request_complete(&self, _kind: RequestKind, _success: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(RequestKind::Login.service_name(), "authentication service");
        assert_eq!(RequestKind::Predict.service_name(), "prediction service");
    }

    #[test]
    fn test_display() {
        assert_eq!(RequestKind::UserInfo.to_string(), "user_info");
    }
}
