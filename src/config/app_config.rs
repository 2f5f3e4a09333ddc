use serde::Deserialize;
use std::path::Path;

use crate::config::settings::OutputFormat;
use crate::core::errors::{EnvdiffError, Result};

/// Top-level configuration read from a TOML file passed with `--config`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub envdiff: EnvdiffSection,
}

impl AppConfig {
    /// Load the configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EnvdiffError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|e| match e {
            EnvdiffError::InvalidConfig { detail } => EnvdiffError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EnvdiffError::InvalidConfig {
            detail: format!("failed to parse config: {e}"),
        })
    }
}

/// The `[envdiff]` section. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvdiffSection {
    /// Exit with code 1 when differences are found.
    #[serde(default)]
    pub check: bool,
    /// Compare values of keys present in both files.
    #[serde(default)]
    pub cmpval: bool,
    /// Key wildcards to keep.
    #[serde(default)]
    pub filter: Vec<String>,
    /// Key wildcards to drop.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Output format, `text` or `json`.
    pub format: Option<OutputFormat>,
}
