//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! --config <path> | HOTEL_BROWSER_CONFIG | defaults
//!     → loader.rs (read & deserialize TOML)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by value to the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, ObservabilityConfig, SourceConfig, SourceKind};
pub use validation::ValidationError;
