//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, single fallback handler)
//!     → request.rs (RequestContext: method, path, arrival time)
//!     → routing::Dispatcher (match, invoke, time)
//!     → response.rs (JSON envelope encoding)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestContext;
pub use response::{encode, EncodedBody, ResponseEnvelope};
pub use server::HttpServer;
