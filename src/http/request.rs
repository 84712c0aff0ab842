//! Per-request context.

use std::time::Instant;

use axum::http::{Method, Request};

/// Transient data for one request. Never shared across requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub received_at: Instant,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            received_at: Instant::now(),
        }
    }

    /// Capture method and path; the query string is not part of the path.
    pub fn from_request<B>(request: &Request<B>) -> Self {
        Self::new(request.method().clone(), request.uri().path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_request_drops_query() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("http://localhost/force/fetch/?verbose=1")
            .body(())
            .unwrap();

        let ctx = RequestContext::from_request(&request);
        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path, "/force/fetch/");
    }
}
