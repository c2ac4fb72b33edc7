//! Session configuration from TOML (`[session]` section)

use sentiment_application::{ClientConfig, UnauthorizedPolicy};
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// What to do with the token after a 401: "keep" (default) or "clear"
    pub on_unauthorized: UnauthorizedPolicy,
}

impl FileSessionConfig {
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::default().with_unauthorized_policy(self.on_unauthorized)
    }
}
