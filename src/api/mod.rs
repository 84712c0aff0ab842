//! Control API: the fixed handler set and its route registrations.
//!
//! | Method | Path           | Handler      |
//! |--------|----------------|--------------|
//! | GET    | `/`            | `Info`       |
//! | GET    | `/log`         | `Log`        |
//! | GET    | `/status`      | `Status`     |
//! | POST   | `/force/fetch` | `ForceFetch` |
//! | POST   | `/force/sort`  | `ForceSort`  |

pub mod handlers;

use std::fmt;
use std::sync::Arc;

use axum::http::Method;
use axum::response::Response;

use crate::config::FetcherConfig;
use crate::daemon::{CommandFetch, FetchOperation, JournalctlSource, LogSource};
use crate::http::RequestContext;
use crate::routing::RouteTable;

/// Shared, read-only dependencies handed to every handler.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<FetcherConfig>,
    pub fetcher: Arc<dyn FetchOperation>,
    pub log_source: Arc<dyn LogSource>,
}

impl Services {
    pub fn new(
        config: FetcherConfig,
        fetcher: Arc<dyn FetchOperation>,
        log_source: Arc<dyn LogSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            log_source,
        }
    }

    /// Production collaborators: the configured fetch command and journalctl.
    pub fn from_config(config: FetcherConfig) -> Self {
        let log_source = Arc::new(JournalctlSource::from_config(&config.log_tail));
        Self::new(config, Arc::new(CommandFetch), log_source)
    }
}

/// The closed set of endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Info,
    Status,
    Log,
    ForceFetch,
    ForceSort,
}

impl Handler {
    pub async fn invoke(self, request: &RequestContext, services: &Services) -> Response {
        tracing::debug!(
            handler = %self,
            path = %request.path,
            method = %request.method,
            "Invoking handler"
        );

        match self {
            Handler::Info => handlers::info(),
            Handler::Status => handlers::status(),
            Handler::Log => handlers::log(services).await,
            Handler::ForceFetch => handlers::force_fetch(services).await,
            Handler::ForceSort => handlers::force_sort(),
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Handler::Info => "info",
            Handler::Status => "status",
            Handler::Log => "log",
            Handler::ForceFetch => "force-fetch",
            Handler::ForceSort => "force-sort",
        };
        f.write_str(name)
    }
}

/// Register every endpoint. Called once before the listener starts.
pub fn route_table() -> RouteTable {
    let mut routes = RouteTable::new();
    routes
        .register("/", Method::GET, Handler::Info)
        .register("/log", Method::GET, Handler::Log)
        .register("/status", Method::GET, Handler::Status)
        .register("/force/fetch", Method::POST, Handler::ForceFetch)
        .register("/force/sort", Method::POST, Handler::ForceSort);
    routes
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_endpoint_with_slash_variant() {
        let routes = route_table();
        let registered: Vec<(String, Method)> = routes
            .entries()
            .iter()
            .map(|e| (e.pattern().path().to_string(), e.pattern().method().clone()))
            .collect();

        assert_eq!(
            registered,
            vec![
                ("/".to_string(), Method::GET),
                ("/log".to_string(), Method::GET),
                ("/log/".to_string(), Method::GET),
                ("/status".to_string(), Method::GET),
                ("/status/".to_string(), Method::GET),
                ("/force/fetch".to_string(), Method::POST),
                ("/force/fetch/".to_string(), Method::POST),
                ("/force/sort".to_string(), Method::POST),
                ("/force/sort/".to_string(), Method::POST),
            ]
        );
    }

    #[test]
    fn handler_names() {
        assert_eq!(Handler::ForceFetch.to_string(), "force-fetch");
        assert_eq!(Handler::Info.to_string(), "info");
    }
}
