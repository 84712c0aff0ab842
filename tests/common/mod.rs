//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpListener;

use fetcherd_api::config::FetcherConfig;
use fetcherd_api::daemon::{FetchError, FetchOperation, LogSource, LogTailError};
use fetcherd_api::{HttpServer, Services, Shutdown};

/// Fetch collaborator with a fixed outcome and an optional delay.
pub struct ScriptedFetch {
    pub result: Result<(), String>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl ScriptedFetch {
    pub fn new(result: Result<(), String>) -> Self {
        Self {
            result,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl FetchOperation for ScriptedFetch {
    async fn fetch(&self, _config: &FetcherConfig) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone().map_err(FetchError::Other)
    }
}

/// Log collaborator with fixed lines or a fixed failure.
pub struct ScriptedLog(pub Result<Vec<String>, String>);

#[async_trait]
impl LogSource for ScriptedLog {
    async fn tail(&self, _lines: usize) -> Result<Vec<String>, LogTailError> {
        self.0.clone().map_err(LogTailError::Other)
    }
}

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the API with the given collaborators.
pub async fn start_server(fetch: Arc<ScriptedFetch>, log: ScriptedLog) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let services = Services::new(FetcherConfig::default(), fetch, Arc::new(log));
    let server = HttpServer::new(services);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}
