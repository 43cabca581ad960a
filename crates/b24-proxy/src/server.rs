//! Proxy server implementation.

use b24_core::ProxyConfig;
use tokio::net::TcpListener;

use crate::error::ProxyError;
use crate::routes;
use crate::state::AppState;

/// The proxy HTTP server.
pub struct ProxyServer {
    config: ProxyConfig,
    state: AppState,
}

impl ProxyServer {
    /// Create a new proxy server with the given listener configuration.
    pub fn new(config: ProxyConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(self) -> Result<(), ProxyError> {
        let addr = self.config.bind_addr();
        let app = routes::create_router(self.state);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ProxyError::StartupFailed(format!("failed to bind {addr}: {e}")))?;

        tracing::info!(address = %addr, "Bitrix proxy listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ProxyError::StartupFailed(e.to_string()))?;

        Ok(())
    }

    /// The configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.config.listen_port
    }
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use b24_client::BitrixClient;
    use std::time::Duration;

    #[test]
    fn test_server_creation() {
        let client = BitrixClient::new(
            "https://example.bitrix24.ru/rest/1/key/",
            Duration::from_secs(30),
        )
        .unwrap();
        let server = ProxyServer::new(ProxyConfig::default(), AppState::new(client));
        assert_eq!(server.listen_port(), 10000);
    }
}
