//! fetcherd control API
//!
//! Reports daemon status, tails its log and triggers fetch/sort runs.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────────┐
//!                 │                  fetcherd-api                      │
//!                 │                                                    │
//!   Request ──────┼─▶ http::server ──▶ routing::Dispatcher ──▶ api::Handler
//!                 │                     (match, time, log)        │    │
//!                 │                                               ▼    │
//!   Response ◀────┼── http::response (JSON envelope) ◀──── daemon::*   │
//!                 │                                     fetch / journal│
//!                 └────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use fetcherd_api::config::{load_config, FetcherConfig};
use fetcherd_api::lifecycle::{bind_listener, wait_for_signal, Shutdown};
use fetcherd_api::observability::{logging, metrics};
use fetcherd_api::{HttpServer, Services};

#[derive(Parser)]
#[command(name = "fetcherd-api")]
#[command(about = "Control API for the fetch daemon", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `web_ui.host`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FetcherConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.web_ui.host = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.web_ui.host,
        log_unit = %config.log_tail.unit,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(Services::from_config(config));

    let listener = match bind_listener(&server.config().web_ui).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Error during serving web interface");
            std::process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
