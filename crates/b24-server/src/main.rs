use clap::Parser;
use std::path::PathBuf;

use b24_client::BitrixClient;
use b24_core::B24Config;
use b24_proxy::{AppState, ProxyServer};

#[derive(Parser, Debug)]
#[command(name = "b24-server", version, about = "HTTP proxy for the Bitrix24 REST API")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the configuration file).
    #[arg(long)]
    listen_addr: Option<String>,

    /// Port to listen on (overrides the configuration file).
    #[arg(long, env = "PORT")]
    listen_port: Option<u16>,

    /// Webhook base URL including the credential path segments
    /// (overrides the configuration file).
    #[arg(long, env = "B24_WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,

    /// Upstream request timeout in seconds (overrides the configuration file).
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    // The webhook URL embeds the credential, so it is never logged.
    let webhook_url = config.require_webhook_url()?;
    let client = BitrixClient::new(webhook_url, config.upstream.request_timeout())?;
    let state = AppState::new(client);

    tracing::info!(
        listen_addr = %config.proxy.listen_addr,
        listen_port = config.proxy.listen_port,
        timeout_secs = config.upstream.timeout_secs,
        "Starting Bitrix24 proxy"
    );

    let server = ProxyServer::new(config.proxy, state);
    server.run().await?;

    Ok(())
}

// -----------------------------
// configuration
// -----------------------------

/// Build the effective configuration: file values first, then command line
/// and environment overrides on top.
fn build_config(cli: &Cli) -> anyhow::Result<B24Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!(config = %path.display(), "Loading configuration");
            B24Config::from_file(path)?
        }
        None => B24Config::default(),
    };

    if let Some(addr) = &cli.listen_addr {
        config.proxy.listen_addr = addr.clone();
    }
    if let Some(port) = cli.listen_port {
        config.proxy.listen_port = port;
    }
    if let Some(url) = &cli.webhook_url {
        config.upstream.webhook_url = Some(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config.upstream.timeout_secs = secs;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_apply() {
        let cli = Cli::try_parse_from([
            "b24-server",
            "--listen-addr",
            "127.0.0.1",
            "--listen-port",
            "8080",
            "--webhook-url",
            "https://example.bitrix24.ru/rest/7/secret/",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.proxy.listen_addr, "127.0.0.1");
        assert_eq!(config.proxy.listen_port, 8080);
        assert_eq!(
            config.upstream.webhook_url.as_deref(),
            Some("https://example.bitrix24.ru/rest/7/secret/")
        );
        assert_eq!(config.upstream.timeout_secs, 5);
    }

    #[test]
    fn test_unset_flags_keep_defaults() {
        // Construct directly so ambient PORT / B24_WEBHOOK_URL variables
        // cannot leak into the parse.
        let cli = Cli {
            config: None,
            listen_addr: None,
            listen_port: None,
            webhook_url: Some("https://example.bitrix24.ru/rest/1/key/".to_string()),
            timeout_secs: None,
        };

        let config = build_config(&cli).unwrap();
        assert_eq!(config.proxy.listen_addr, "0.0.0.0");
        assert_eq!(config.proxy.listen_port, 10000);
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/b24.yaml")),
            listen_addr: None,
            listen_port: None,
            webhook_url: None,
            timeout_secs: None,
        };

        assert!(build_config(&cli).is_err());
    }
}
