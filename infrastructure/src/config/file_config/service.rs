//! Service configuration from TOML (`[service]` section)

use crate::http::settings::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ServiceSettings};
use reqwest::Url;
use sentiment_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the sentiment service
    pub base_url: String,
    /// Per-request timeout in seconds (transport default when absent)
    pub timeout_seconds: Option<u64>,
    /// Override for the `User-Agent` header
    pub user_agent: Option<String>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl FileServiceConfig {
    /// Convert to adapter settings
    pub fn to_settings(&self) -> ServiceSettings {
        ServiceSettings::new(self.base_url.trim())
            .with_timeout_seconds(self.timeout_seconds)
            .with_user_agent(
                self.user_agent
                    .as_deref()
                    .map(str::trim)
                    .filter(|ua| !ua.is_empty())
                    .unwrap_or(DEFAULT_USER_AGENT),
            )
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.base_url.trim();
        let url_ok = Url::parse(base_url)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !url_ok {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBaseUrl {
                    value: self.base_url.clone(),
                },
                format!(
                    "service.base_url: '{}' is not an http(s) URL",
                    self.base_url
                ),
            ));
        }

        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "service.timeout_seconds cannot be 0",
            ));
        }

        if let Some(ua) = &self.user_agent
            && ua.trim().is_empty()
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyUserAgent,
                "service.user_agent is blank, falling back to the default",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_to_settings() {
        let config = FileServiceConfig {
            base_url: " https://sentiment.example.com ".to_string(),
            timeout_seconds: Some(10),
            user_agent: Some("critic/1.0".to_string()),
        };
        let settings = config.to_settings();
        assert_eq!(settings.base_url, "https://sentiment.example.com");
        assert_eq!(settings.timeout, Some(Duration::from_secs(10)));
        assert_eq!(settings.user_agent, "critic/1.0");
    }

    #[test]
    fn test_blank_user_agent_falls_back() {
        let config = FileServiceConfig {
            user_agent: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.to_settings().user_agent, DEFAULT_USER_AGENT);

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyUserAgent);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_validate_rejects_bad_url_and_zero_timeout() {
        let config = FileServiceConfig {
            base_url: "localhost:8000".to_string(),
            timeout_seconds: Some(0),
            user_agent: None,
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidBaseUrl { .. }
        ));
        assert_eq!(issues[1].code, ConfigIssueCode::ZeroTimeout);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FileServiceConfig::default().validate().is_empty());
    }
}
