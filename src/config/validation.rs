//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, URLs and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::{AppConfig, SourceKind};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}': not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("source.url is required when source.kind = \"http\"")]
    MissingSourceUrl,

    #[error("invalid source.url '{0}': {1}")]
    InvalidSourceUrl(String, String),

    #[error("source.path must not be empty when source.kind = \"file\"")]
    EmptySourcePath,

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    match config.source.kind {
        SourceKind::File if config.source.path.trim().is_empty() => {
            errors.push(ValidationError::EmptySourcePath);
        }
        SourceKind::File => {}
        SourceKind::Http => match config.source.data_source() {
            Ok(crate::catalog::DataSource::Http(url))
                if url.scheme() != "http" && url.scheme() != "https" =>
            {
                errors.push(ValidationError::InvalidSourceUrl(
                    url.to_string(),
                    "scheme must be http or https".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => errors.push(e),
        },
    }

    if config.source.fetch_timeout_secs == 0 {
        errors.push(ValidationError::Zero("source.fetch_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
