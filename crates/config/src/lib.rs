//! Deployment defaults loaded from TOML or YAML files.
//!
//! Every field is optional; anything left out falls back to the calculator's
//! built-in defaults, and explicit command-line flags override the file.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Defaults for the optional calculator inputs.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeployDefaults {
    /// Radius of the orbited body, same unit as the apsides.
    #[serde(default)]
    pub body_radius: Option<f64>,
    #[serde(default)]
    pub satellite_count: Option<u32>,
    #[serde(default)]
    pub preserve_order: Option<bool>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load deployment defaults; `.toml` files are read as TOML, anything else as YAML.
pub fn load_defaults<P: AsRef<Path>>(path: P) -> Result<DeployDefaults, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
