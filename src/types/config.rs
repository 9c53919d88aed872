//! Curve parameters with TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{NtError, NtResult};
use super::{DEFAULT_STEEPNESS, DEFAULT_TOTAL_ITEMS};

/// Parameters for a weighting curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Number of discrete units on the curve.
    pub total_items: i64,

    /// Offset added inside the logarithm. Higher is flatter.
    pub steepness: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            total_items: DEFAULT_TOTAL_ITEMS,
            steepness: DEFAULT_STEEPNESS,
        }
    }
}

impl CurveConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> NtResult<Self> {
        toml::from_str(text).map_err(|e| NtError::Config(e.to_string()))
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> NtResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded curve config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml_string(&self) -> NtResult<String> {
        toml::to_string(self).map_err(|e| NtError::Config(e.to_string()))
    }
}
