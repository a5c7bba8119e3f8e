use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the demonstration driver shipped as this crate's binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Distinct elements inserted during the randomized shakedown.
    pub shakedown_elements: usize,
    /// Seed for the shakedown's random number generator.
    pub shakedown_seed: u64,
}

impl Config {
    pub fn new() -> Self {
        Config {
            demo: DemoConfig::default(),
        }
    }

    /// Loads settings from a TOML file; missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            shakedown_elements: 512,
            shakedown_seed: 42,
        }
    }
}
