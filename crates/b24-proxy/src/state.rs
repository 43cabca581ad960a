//! Proxy application state.

use b24_client::BitrixClient;

/// Shared application state for the proxy.
///
/// Cloned per request by axum. `BitrixClient` is internally reference
/// counted, so all clones share one connection pool.
#[derive(Clone)]
pub struct AppState {
    client: BitrixClient,
}

impl AppState {
    /// Create state around a configured upstream client.
    pub fn new(client: BitrixClient) -> Self {
        Self { client }
    }

    /// The upstream client.
    pub fn client(&self) -> &BitrixClient {
        &self.client
    }
}
