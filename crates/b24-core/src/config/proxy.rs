//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the inbound HTTP listener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Address to listen on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Port to listen on for incoming HTTP requests.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            listen_port: default_listen_port(),
        }
    }
}

impl ProxyConfig {
    /// The socket address string to bind, e.g. `0.0.0.0:10000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.listen_addr, self.listen_port)
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_listen_port() -> u16 {
    10000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0");
        assert_eq!(config.listen_port, 10000);
    }

    #[test]
    fn test_bind_addr() {
        let config = ProxyConfig {
            listen_addr: "127.0.0.1".to_string(),
            listen_port: 8080,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
