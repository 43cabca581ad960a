//! # b24-client
//!
//! HTTP client for the Bitrix24 webhook REST API.
//!
//! Every call is a form-encoded POST to `<webhook base><method>.json`,
//! where the webhook base carries the credential path segments. The client
//! is deliberately schema-free: it forwards the parsed JSON body verbatim
//! and leaves interpretation to the routing layer.
//!
//! Failures never escape [`BitrixClient::call`]. Transport errors,
//! non-success statuses, and non-JSON bodies are logged and normalized
//! into the same `{"error": message}` body shape the Bitrix24 API itself
//! uses for its errors, so callers can branch on one shape.

pub mod client;
pub mod error;
pub mod response;

pub use client::BitrixClient;
pub use error::ClientError;
pub use response::BitrixResponse;
