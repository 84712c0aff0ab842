//! Endpoint implementations.
//!
//! Handlers never signal failure upward: collaborator errors end up in the
//! envelope (`force_fetch`) or are logged and degraded (`log`).

use axum::response::{IntoResponse, Response};

use crate::api::Services;
use crate::http::ResponseEnvelope;

/// Plain-text liveness acknowledgment.
pub fn info() -> Response {
    "API is online".into_response()
}

/// Daemon status. The lock flags are kept for old clients and are always false.
pub fn status() -> Response {
    let mut res = ResponseEnvelope::new();
    res.insert("running", true)
        .insert("fetch_lock", false)
        .insert("sort_lock", false);
    res.into_response()
}

/// Last lines of daemon output. A failing log source yields an empty log,
/// still with `success: true`.
pub async fn log(services: &Services) -> Response {
    let lines = match services.log_source.tail(services.config.log_tail.lines).await {
        Ok(lines) => lines,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read daemon log");
            Vec::new()
        }
    };

    let mut res = ResponseEnvelope::success(true);
    res.insert("log", lines);
    res.into_response()
}

/// Run one fetch inside the request.
pub async fn force_fetch(services: &Services) -> Response {
    let result = services.fetcher.fetch(&services.config).await;

    let mut res = ResponseEnvelope::success(result.is_ok());
    if let Err(e) = result {
        tracing::warn!(error = %e, "Forced fetch failed");
        res.insert("error", e.to_string());
    }
    res.into_response()
}

/// Sorting is not wired up yet; reports success without doing anything.
pub fn force_sort() -> Response {
    ResponseEnvelope::success(true).into_response()
}
