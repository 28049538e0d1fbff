//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the app.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::catalog::DataSource;
use crate::config::validation::ValidationError;

/// Root configuration for the hotel browser.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where the hotel catalog is loaded from.
    pub source: SourceConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Kind of catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

/// Catalog source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source kind ("file" or "http").
    pub kind: SourceKind,

    /// Path of the JSON file, used when `kind = "file"`.
    pub path: String,

    /// Endpoint returning the JSON array, used when `kind = "http"`.
    pub url: Option<String>,

    /// HTTP fetch timeout in seconds.
    pub fetch_timeout_secs: u64,

    /// Load the catalog at startup instead of on first request.
    pub preload: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::File,
            path: "assets/hotels.json".to_string(),
            url: None,
            fetch_timeout_secs: 10,
            preload: true,
        }
    }
}

impl SourceConfig {
    /// Build the runtime data source.
    pub fn data_source(&self) -> Result<DataSource, ValidationError> {
        match self.kind {
            SourceKind::File => Ok(DataSource::File(PathBuf::from(&self.path))),
            SourceKind::Http => {
                let raw = self.url.as_deref().ok_or(ValidationError::MissingSourceUrl)?;
                let url = Url::parse(raw)
                    .map_err(|e| ValidationError::InvalidSourceUrl(raw.to_string(), e.to_string()))?;
                Ok(DataSource::Http(url))
            }
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}
