//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use crate::config::schema::ScannerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
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

/// Read a TOML file into a config without validating it.
///
/// Callers that layer CLI overrides on top validate afterwards.
pub fn read_config(path: &Path) -> Result<ScannerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load configuration from an optional TOML file, apply overrides, then validate.
///
/// Without a file every section takes its defaults.
pub fn load_config(
    path: Option<&Path>,
    overrides: impl FnOnce(&mut ScannerConfig),
) -> Result<ScannerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ScannerConfig::default(),
    };
    overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
