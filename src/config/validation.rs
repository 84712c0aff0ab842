//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FetcherConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::FetcherConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("web_ui.host must not be empty")]
    EmptyBindAddress,

    #[error("log_tail.lines must be greater than zero")]
    ZeroLogLines,

    #[error("log_tail.unit must not be empty")]
    EmptyLogUnit,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a deserialized config for values serde cannot reject on its own.
pub fn validate_config(config: &FetcherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.web_ui.host.trim().is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if config.log_tail.lines == 0 {
        errors.push(ValidationError::ZeroLogLines);
    }

    if config.log_tail.unit.trim().is_empty() {
        errors.push(ValidationError::EmptyLogUnit);
    }

    let metrics_address = &config.observability.metrics_address;
    if config.observability.metrics_enabled && metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
