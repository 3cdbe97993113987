use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default config file name, resolved from the working directory.
pub const CONFIG_FILE: &str = "amani.toml";

/// Optional CLI configuration. Flags always win over file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Content store JSON path used when `--store` is absent
    pub store: Option<PathBuf>,

    /// Result cap applied when a search does not pass `--limit`
    pub default_limit: Option<usize>,
}

impl CliConfig {
    /// Load the config from an explicit path, or from `./amani.toml`
    /// when present. A missing default file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }
}
