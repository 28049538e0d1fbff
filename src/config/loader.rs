//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the config file when no CLI path is given.
pub const CONFIG_ENV: &str = "HOTEL_BROWSER_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "IO error reading {}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    parse_config(&content)
}

/// Pick the config file: explicit path, then `HOTEL_BROWSER_CONFIG`, then defaults.
pub fn resolve_config(cli_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    match cli_path.map(Path::to_path_buf).or(env_path) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            load_config(&path)
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Ok(AppConfig::default())
        }
    }
}
