//! Route definitions for the proxy.

use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the proxy router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/proxy", get(handlers::handle_proxy))
        .route("/health", get(handlers::handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
