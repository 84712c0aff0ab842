//! Control-plane HTTP API for the fetch daemon.

pub mod api;
pub mod config;
pub mod daemon;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use api::Services;
pub use config::FetcherConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
