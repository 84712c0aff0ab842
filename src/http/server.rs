//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with a single fallback handler
//! - Feed every request into the routing `Dispatcher`
//! - Map routing misses to 404
//! - Record request metrics
//! - Serve with graceful shutdown

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::api::{self, Services};
use crate::config::FetcherConfig;
use crate::http::request::RequestContext;
use crate::observability::metrics;
use crate::routing::{DispatchOutcome, Dispatcher};

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub services: Services,
}

/// HTTP server for the control API.
pub struct HttpServer {
    router: Router,
    config: Arc<FetcherConfig>,
}

impl HttpServer {
    /// Build the route table and router. Routes are frozen from here on.
    pub fn new(services: Services) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(api::route_table()));
        let config = Arc::clone(&services.config);

        tracing::debug!(routes = dispatcher.routes().len(), "Route table built");

        let state = AppState {
            dispatcher,
            services,
        };

        Self {
            router: Self::build_router(state),
            config,
        }
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// A clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server starting to listen");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }
}

async fn dispatch_handler(State(state): State<AppState>, request: Request) -> Response {
    let ctx = RequestContext::from_request(&request);

    match state.dispatcher.dispatch(&ctx, &state.services).await {
        DispatchOutcome::Handled {
            response,
            route,
            record,
        } => {
            metrics::record_request(
                ctx.method.as_str(),
                &route,
                response.status().as_u16(),
                record.elapsed,
            );
            response
        }
        DispatchOutcome::NotFound => {
            metrics::record_request(
                ctx.method.as_str(),
                metrics::UNMATCHED_ROUTE,
                StatusCode::NOT_FOUND.as_u16(),
                ctx.received_at.elapsed(),
            );
            (StatusCode::NOT_FOUND, "404 page not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::stub_services;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    fn server() -> HttpServer {
        HttpServer::new(stub_services(Ok(()), Ok(vec!["line".into()])))
    }

    async fn send(method: Method, uri: &str) -> Response {
        server()
            .router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn root_is_plain_text() {
        for uri in ["/", "/?probe=1"] {
            let response = send(Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_text(response).await, "API is online");
        }
    }

    #[tokio::test]
    async fn status_with_and_without_slash() {
        for uri in ["/status", "/status/"] {
            let response = send(Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/json"
            );
            let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
            assert_eq!(
                body,
                json!({"running": true, "fetch_lock": false, "sort_lock": false})
            );
        }
    }

    #[tokio::test]
    async fn wrong_method_is_plain_404() {
        let response = send(Method::POST, "/status").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "404 page not found");

        let response = send(Method::GET, "/force/sort").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let response = send(Method::GET, "/admin/status").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exposes_config() {
        assert_eq!(server().config().web_ui.host, "127.0.0.1:3000");
    }
}
