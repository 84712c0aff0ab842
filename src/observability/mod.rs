//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher / handlers produce:
//!     → logging.rs (structured log events, completion records)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
