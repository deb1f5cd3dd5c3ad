//! Configuration loading from texprune.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for texprune.toml.
#[derive(Debug, Deserialize, Default)]
pub struct TexpruneConfig {
    /// Extensions force-removed regardless of usage. CLI flags win over
    /// file values.
    pub remove_ext: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from texprune.toml in the main folder, if present.
pub fn load_config(root: &Path) -> Result<Option<TexpruneConfig>> {
    let path = root.join("texprune.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid texprune.toml")?;
    Ok(Some(cfg))
}
