//! Ordered route registry built once at startup.

use axum::http::Method;

use crate::api::Handler;
use crate::routing::route::{RouteEntry, RoutePattern};

/// Routes in registration order.
///
/// Writes happen only before the server starts; afterwards the table is
/// moved into the `Dispatcher` and only read.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route for `path`, plus `path + "/"` when `path` does not
    /// already end in a slash. Duplicates are allowed; lookup keeps the
    /// first one.
    pub fn register(&mut self, path: impl Into<String>, method: Method, handler: Handler) -> &mut Self {
        let pattern = RoutePattern::new(path, method);
        let slashed = (!pattern.has_trailing_slash()).then(|| pattern.with_trailing_slash());

        self.entries.push(RouteEntry::new(pattern, handler));
        if let Some(slashed) = slashed {
            self.entries.push(RouteEntry::new(slashed, handler));
        }
        self
    }

    /// First entry matching the request, in registration order.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.pattern().matches(method, path))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
