//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the daemon's control API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FetcherConfig {
    /// Web interface settings (bind address).
    pub web_ui: WebUiConfig,

    /// External fetch operation.
    pub fetch: FetchConfig,

    /// Daemon log tail source.
    pub log_tail: LogTailConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Web interface configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebUiConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub host: String,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Fetch operation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// Program and arguments run on every fetch. Empty means not configured.
    pub command: Vec<String>,
}

/// Log tail configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogTailConfig {
    /// Journal reader executable.
    pub program: String,

    /// Systemd unit whose output is tailed.
    pub unit: String,

    /// Number of trailing lines returned by `/log`.
    pub lines: usize,
}

impl Default for LogTailConfig {
    fn default() -> Self {
        Self {
            program: "journalctl".to_string(),
            unit: "fetcherd".to_string(),
            lines: 100,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
