// Action model shared between the router and the binary
pub mod action;

// Configuration types shared across all b24 crates
pub mod config;

// Re-export commonly used types for convenience
pub use action::Action;
pub use config::{B24Config, ConfigError, ProxyConfig, UpstreamConfig};
