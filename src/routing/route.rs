//! Route patterns and entries.

use axum::http::Method;

use crate::api::Handler;

/// An exact path bound to one HTTP method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    path: String,
    method: Method,
}

impl RoutePattern {
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.path.ends_with('/')
    }

    /// The same pattern with one `/` appended.
    pub fn with_trailing_slash(&self) -> Self {
        Self {
            path: format!("{}/", self.path),
            method: self.method.clone(),
        }
    }

    /// Method must be equal; the path must equal either the request path
    /// verbatim or the request path with its trailing slashes removed.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && (self.path == path || self.path == path.trim_end_matches('/'))
    }
}

/// A registered route. Owned by the `RouteTable` and never mutated.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    handler: Handler,
}

impl RouteEntry {
    pub fn new(pattern: RoutePattern, handler: Handler) -> Self {
        Self { pattern, handler }
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }
}
