//! Connection settings for the HTTP adapter.

use std::time::Duration;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("movie-sentiment/", env!("CARGO_PKG_VERSION"));

/// Where and how to reach the sentiment service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub base_url: String,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set a timeout specified in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied beyond the transport default.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
