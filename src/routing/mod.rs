//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Registration (at startup):
//!     register(path, method, handler)
//!     → route.rs (pattern + trailing-slash variant)
//!     → table.rs (append in registration order)
//!     → Freeze inside an immutable Dispatcher
//!
//! Incoming Request (method, path)
//!     → dispatcher.rs (first matching entry, invoke, time)
//!     → Return: handler response + completion record, or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime (no locks)
//! - Exact string equality only: no parameters, wildcards or prefixes
//! - Deterministic: first registered match wins

pub mod dispatcher;
pub mod route;
pub mod table;

pub use dispatcher::{CompletionRecord, DispatchOutcome, Dispatcher};
pub use route::{RouteEntry, RoutePattern};
pub use table::RouteTable;
