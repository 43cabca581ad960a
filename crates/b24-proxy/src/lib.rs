//! # b24-proxy
//!
//! Single-endpoint HTTP proxy in front of the Bitrix24 REST API.
//!
//! This crate implements the routing and aggregation layer:
//! - Validates the `action` query parameter and the id parameter it requires
//! - Maps each action to a fixed Bitrix24 REST method
//! - Assembles the merged task comment timeline (the one two-step action)
//! - Forwards upstream JSON bodies verbatim, error bodies included
//!
//! ## Architecture
//!
//! ```text
//! Caller (report builder, CRM tooling)
//!       │
//!       │ GET /proxy?action=<name>&<id param>
//!       ▼
//! ┌───────────────────┐
//! │  B24 Proxy        │
//! │  1. Validate      │  ← b24-core::Action
//! │  2. Dispatch      │
//! │  3. Call upstream │  ← b24-client
//! │  4. Merge / shape │
//! └────────┬──────────┘
//!          │ form-encoded POST <webhook base><method>.json
//!          ▼
//!    Bitrix24 REST API
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use b24_client::BitrixClient;
//! use b24_core::ProxyConfig;
//! use b24_proxy::{AppState, ProxyServer};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BitrixClient::new(
//!         "https://example.bitrix24.ru/rest/7/secret/",
//!         Duration::from_secs(30),
//!     )?;
//!     let server = ProxyServer::new(ProxyConfig::default(), AppState::new(client));
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod comments;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use comments::CommentTimeline;
pub use error::ProxyError;
pub use routes::create_router;
pub use server::ProxyServer;
pub use state::AppState;
