//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a config.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
