//! Session client configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the client does with its token when an authenticated call is
/// rejected with HTTP 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnauthorizedPolicy {
    /// Trust the token until an explicit logout or a new login (default).
    /// A stale token is reported, never cleared.
    #[default]
    Keep,
    /// Drop the token so the session returns to the unauthenticated state.
    Clear,
}

impl fmt::Display for UnauthorizedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnauthorizedPolicy::Keep => write!(f, "keep"),
            UnauthorizedPolicy::Clear => write!(f, "clear"),
        }
    }
}

/// Session client behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub on_unauthorized: UnauthorizedPolicy,
}

impl ClientConfig {
    pub fn with_unauthorized_policy(mut self, policy: UnauthorizedPolicy) -> Self {
        self.on_unauthorized = policy;
        self
    }

    pub fn clears_on_unauthorized(&self) -> bool {
        self.on_unauthorized == UnauthorizedPolicy::Clear
    }
}
