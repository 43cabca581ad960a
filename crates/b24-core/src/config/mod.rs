//! Configuration types for the Bitrix24 HTTP proxy.
//!
//! Configuration can be loaded from a YAML file and overridden by command
//! line flags or environment variables in the server binary. All fields
//! have working defaults except the upstream webhook URL, which must come
//! from the file, a flag, or the environment.
//!
//! # Configuration File
//!
//! ```yaml
//! project: crm-proxy
//! proxy:
//!   listen_addr: 0.0.0.0
//!   listen_port: 10000
//! upstream:
//!   webhook_env: B24_WEBHOOK_URL
//!   timeout_secs: 30
//! ```

pub mod proxy;
pub mod upstream;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use proxy::ProxyConfig;
pub use upstream::UpstreamConfig;

/// Complete proxy configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct B24Config {
    /// Project name.
    #[serde(default)]
    pub project: Option<String>,

    /// Upstream Bitrix24 endpoint.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub proxy: ProxyConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl B24Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Resolve the webhook base URL, failing when neither the inline value
    /// nor the environment provides one.
    pub fn require_webhook_url(&self) -> Result<String, ConfigError> {
        self.upstream.resolve_webhook_url().ok_or_else(|| {
            ConfigError::Config(format!(
                "webhook base URL is not set (provide upstream.webhook_url or the {} environment variable)",
                self.upstream.webhook_env
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config = B24Config::from_yaml("{}").unwrap();
        assert_eq!(config.proxy.listen_addr, "0.0.0.0");
        assert_eq!(config.proxy.listen_port, 10000);
        assert_eq!(config.upstream.timeout_secs, 30);
        assert!(config.upstream.webhook_url.is_none());
    }

    #[test]
    fn test_full_yaml_parses() {
        let yaml = r#"
project: crm-proxy
proxy:
  listen_addr: 127.0.0.1
  listen_port: 8080
upstream:
  webhook_url: https://example.bitrix24.ru/rest/7/secret/
  timeout_secs: 10
"#;
        let config = B24Config::from_yaml(yaml).unwrap();
        assert_eq!(config.project.as_deref(), Some("crm-proxy"));
        assert_eq!(config.proxy.listen_port, 8080);
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(
            config.upstream.webhook_url.as_deref(),
            Some("https://example.bitrix24.ru/rest/7/secret/")
        );
    }

    #[test]
    fn test_require_webhook_url_prefers_inline_value() {
        let mut config = B24Config::default();
        config.upstream.webhook_url = Some("https://example.bitrix24.ru/rest/1/key/".to_string());
        assert_eq!(
            config.require_webhook_url().unwrap(),
            "https://example.bitrix24.ru/rest/1/key/"
        );
    }

    #[test]
    fn test_require_webhook_url_fails_when_unset() {
        let mut config = B24Config::default();
        // A variable name that no environment is expected to define.
        config.upstream.webhook_env = "B24_WEBHOOK_URL_TEST_UNSET".to_string();
        let err = config.require_webhook_url().unwrap_err();
        assert!(err.to_string().contains("B24_WEBHOOK_URL_TEST_UNSET"));
    }
}
