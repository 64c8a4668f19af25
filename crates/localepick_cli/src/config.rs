//! localepick configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUPPORTED_PATH: &str = "/usr/share/i18n/SUPPORTED";

/// Top-level localepick configuration (localepick.toml)
///
/// Every field is optional; command-line flags override file values.
#[derive(Debug, Deserialize, Serialize)]
pub struct LocalepickConfig {
    /// Interface language identifier, e.g. `de_AT` or `en`
    #[serde(default)]
    pub language: Option<String>,
    /// Two-letter country code from the location step
    #[serde(default)]
    pub country: Option<String>,
    /// File listing installable locales
    #[serde(default = "default_supported")]
    pub supported: String,
    /// Write the result here instead of printing it
    #[serde(default)]
    pub output: Option<String>,
    /// Emit a JSON object instead of KEY=value lines
    #[serde(default)]
    pub json: bool,
}

fn default_supported() -> String {
    DEFAULT_SUPPORTED_PATH.to_string()
}

impl LocalepickConfig {
    /// Load configuration from an explicit path, or from `./localepick.toml`
    /// when present; defaults apply otherwise.
    ///
    /// An explicit path that does not exist is an error; a missing implicit
    /// one is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("No config file at {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let implicit = Path::new("localepick.toml");
                if !implicit.exists() {
                    return Ok(Self::default());
                }
                implicit.to_path_buf()
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: LocalepickConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }
}

impl Default for LocalepickConfig {
    fn default() -> Self {
        Self {
            language: None,
            country: None,
            supported: default_supported(),
            output: None,
            json: false,
        }
    }
}
