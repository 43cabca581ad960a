//! Upstream Bitrix24 endpoint configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the upstream Bitrix24 REST endpoint.
///
/// The webhook base URL is the full inbound-webhook prefix including the
/// user id and secret path segments, e.g.
/// `https://example.bitrix24.ru/rest/7/abc123secret/`. REST method names
/// are appended to it, so the whole value is a credential and should
/// normally come from the environment rather than a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Webhook base URL. Takes precedence over `webhook_env` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Environment variable to read the webhook base URL from.
    #[serde(default = "default_webhook_env")]
    pub webhook_env: String,

    /// Request timeout in seconds for upstream calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_env: default_webhook_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Resolve the webhook base URL from this configuration.
    ///
    /// An inline `webhook_url` wins; otherwise the variable named by
    /// `webhook_env` is consulted.
    pub fn resolve_webhook_url(&self) -> Option<String> {
        if let Some(url) = &self.webhook_url {
            return Some(url.clone());
        }
        std::env::var(&self.webhook_env).ok()
    }

    /// Check if this configuration reads the credential from the environment.
    pub fn uses_env_credentials(&self) -> bool {
        self.webhook_url.is_none()
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default value functions
fn default_webhook_env() -> String {
    "B24_WEBHOOK_URL".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
