//! Startup orchestration.

use tokio::net::TcpListener;

use crate::config::WebUiConfig;

/// Errors that stop the process before it serves anything.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the web interface listener.
pub async fn bind_listener(config: &WebUiConfig) -> Result<TcpListener, StartupError> {
    let listener = TcpListener::bind(&config.host)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.host.clone(),
            source,
        })?;

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(address = %addr, "Listener bound");
    }
    Ok(listener)
}
