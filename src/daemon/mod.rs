//! Boundary to the fetch daemon itself.
//!
//! The control API never implements fetching or log storage. It talks to
//! them through two capabilities:
//!
//! ```text
//! force-fetch handler ──▶ FetchOperation::fetch(&FetcherConfig)
//! log handler        ──▶ LogSource::tail(lines)
//! ```
//!
//! Implementations serialize their own concurrent invocations; callers
//! impose no ordering, timeout or retry.

pub mod fetch;
pub mod journal;

pub use fetch::{CommandFetch, FetchError, FetchOperation};
pub use journal::{JournalctlSource, LogSource, LogTailError};
