//! Error types for the Bitrix24 client.

use thiserror::Error;

/// Errors that can occur while calling the Bitrix24 REST API.
///
/// These never cross the [`crate::BitrixClient::call`] boundary; the
/// client renders them into the `{"error": message}` body shape before
/// returning.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to construct the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    BuildFailed(#[source] reqwest::Error),

    /// The request did not complete (connect failure, timeout, TLS error).
    #[error("request to {method} failed: {source}")]
    RequestFailed {
        method: String,
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success HTTP status.
    #[error("upstream returned HTTP {status} for {method}")]
    UpstreamStatus {
        method: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON from {method}: {source}")]
    InvalidJson {
        method: String,
        source: reqwest::Error,
    },
}
