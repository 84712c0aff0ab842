//! Request matching and handler invocation.
//!
//! # Responsibilities
//! - Resolve (method, path) against the route table
//! - Invoke the matched handler with the shared services
//! - Time the handler and emit one completion record per dispatch
//! - Report an explicit `NotFound` when nothing matches
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in registration order (route counts are tiny)
//! - Handler failures are encoded by the handler itself, never caught here

use std::time::{Duration, Instant};

use axum::http::Method;
use axum::response::Response;

use crate::api::{Handler, Services};
use crate::http::RequestContext;
use crate::routing::table::RouteTable;

/// Timing entry for one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Request path as received, before slash normalization.
    pub path: String,
    pub method: Method,
    pub elapsed: Duration,
}

impl CompletionRecord {
    /// Log the record at info level.
    pub fn emit(&self) {
        tracing::info!(
            path = %self.path,
            method = %self.method,
            time = ?self.elapsed,
            "Request complete"
        );
    }
}

/// Result of dispatching a request.
pub enum DispatchOutcome {
    /// A route matched and its handler ran.
    Handled {
        response: Response,
        /// Path of the pattern that matched.
        route: String,
        record: CompletionRecord,
    },
    /// No route matched the method and path.
    NotFound,
}

/// Matches requests against a frozen route table.
#[derive(Debug)]
pub struct Dispatcher {
    routes: RouteTable,
}

impl Dispatcher {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Handler bound to the first matching route, if any.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<Handler> {
        self.routes.lookup(method, path).map(|entry| entry.handler())
    }

    /// Match, invoke and time one request.
    pub async fn dispatch(&self, request: &RequestContext, services: &Services) -> DispatchOutcome {
        let Some(entry) = self.routes.lookup(&request.method, &request.path) else {
            tracing::debug!(
                path = %request.path,
                method = %request.method,
                "No route matched"
            );
            return DispatchOutcome::NotFound;
        };

        let start = Instant::now();
        let response = entry.handler().invoke(request, services).await;
        let record = CompletionRecord {
            path: request.path.clone(),
            method: request.method.clone(),
            elapsed: start.elapsed(),
        };
        record.emit();

        DispatchOutcome::Handled {
            response,
            route: entry.pattern().path().to_string(),
            record,
        }
    }
}
