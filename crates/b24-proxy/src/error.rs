//! Error types for the proxy crate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while handling a proxy request.
///
/// The response mapping preserves the service's long-standing contract:
/// validation failures are 400 with a machine-readable code, a missing
/// task is a 200 with an error body, and anything unexpected is a 500
/// whose body carries the message. Upstream failures never reach this
/// enum; they travel inside the forwarded body (see `b24-client`).
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The request carried no `action` parameter.
    #[error("request has no action parameter")]
    MissingAction,

    /// The `action` parameter named no known action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The action's required parameter was absent or empty.
    #[error("missing required parameter: {name}")]
    MissingParam { name: &'static str },

    /// The referenced task does not exist or is not accessible.
    #[error("task not found: {message}")]
    TaskNotFound { message: String },

    /// Failed to start the HTTP server.
    #[error("failed to start proxy: {0}")]
    StartupFailed(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MissingAction => error_body(StatusCode::BAD_REQUEST, "missing_action"),
            ProxyError::UnknownAction(_) => error_body(StatusCode::BAD_REQUEST, "unknown_action"),
            ProxyError::MissingParam { name } => {
                error_body(StatusCode::BAD_REQUEST, &format!("missing_{name}"))
            }
            // Deliberately a 200: existing callers branch on the body shape.
            ProxyError::TaskNotFound { message } => (
                StatusCode::OK,
                Json(json!({ "error": "task_not_found", "message": message })),
            )
                .into_response(),
            ProxyError::StartupFailed(message) => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
            ProxyError::Internal(err) => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        }
    }
}

fn error_body(status: StatusCode, code: &str) -> Response {
    (status, Json(json!({ "error": code }))).into_response()
}
