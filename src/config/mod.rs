mod access;
mod application;
mod timestamp;

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

pub use access::AccessLayoutConfig;
pub use application::ApplicationLayoutConfig;
pub use timestamp::{TimestampConfig, TimestampMode};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Deserializes a layout configuration from TOML text. Absent keys keep
/// their defaults, so partial configurations are valid.
pub fn from_toml_str<T: DeserializeOwned>(raw: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(raw)?)
}

/// Reads a layout configuration from a TOML file.
pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}
