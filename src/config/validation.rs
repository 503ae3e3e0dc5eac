//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: OracleConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::OracleConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The upstream endpoint is not a usable http(s) URL.
    InvalidEndpoint { value: String, reason: String },
    /// The upstream timeout is zero.
    ZeroTimeout,
    /// The listener bind address does not parse as a socket address.
    InvalidBindAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidEndpoint { value, reason } => {
                write!(f, "invalid upstream endpoint '{}': {}", value, reason)
            }
            ValidationError::ZeroTimeout => write!(f, "upstream timeout must be greater than zero"),
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid listener bind address '{}'", addr)
            }
        }
    }
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &OracleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.upstream.endpoint) {
        Ok(parsed) => {
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                errors.push(ValidationError::InvalidEndpoint {
                    value: config.upstream.endpoint.clone(),
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
        }
        Err(e) => errors.push(ValidationError::InvalidEndpoint {
            value: config.upstream.endpoint.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
