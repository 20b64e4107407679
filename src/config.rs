use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level nearby configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NearbyConfig {
    /// Input file settings.
    #[serde(default)]
    pub io: IoToml,

    /// Classifier settings.
    #[serde(default)]
    pub classify: ClassifyToml,
}

impl NearbyConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_true")]
    pub skip_header: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            skip_header: true,
            delimiter: default_delimiter(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_delimiter() -> String {
    ",".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyToml {
    #[serde(default = "default_zero_range")]
    pub zero_range: String,
}

impl Default for ClassifyToml {
    fn default() -> Self {
        Self {
            zero_range: default_zero_range(),
        }
    }
}

fn default_zero_range() -> String {
    "ignore".to_string()
}
