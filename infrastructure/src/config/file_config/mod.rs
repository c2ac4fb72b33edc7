//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod repl;
mod service;
mod session;

pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use service::FileServiceConfig;
pub use session::FileSessionConfig;

use sentiment_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote service settings
    pub service: FileServiceConfig,
    /// Session token policy
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.service.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_application::UnauthorizedPolicy;
    use sentiment_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "https://sentiment.example.com"
timeout_seconds = 15
user_agent = "critic/2.0"

[session]
on_unauthorized = "clear"

[output]
format = "plain"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "https://sentiment.example.com");
        assert_eq!(config.service.timeout_seconds, Some(15));
        assert_eq!(config.service.user_agent.as_deref(), Some("critic/2.0"));
        assert_eq!(config.session.on_unauthorized, UnauthorizedPolicy::Clear);
        assert_eq!(config.output.format, Some(OutputFormat::Plain));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[service]
base_url = "http://10.0.0.5:9000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "http://10.0.0.5:9000");
        // Defaults should apply
        assert!(config.service.timeout_seconds.is_none());
        assert_eq!(config.session.on_unauthorized, UnauthorizedPolicy::Keep);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }
}
