//! Configuration file support for the refinement pipeline

use crate::error::{RefineError, Result};
use crate::mesh::validate_factor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of smoothing passes
pub const DEFAULT_ITERATIONS: u32 = 4;

/// Default smoothing blend factor
pub const DEFAULT_FACTOR: f64 = 0.6;

/// Parameters for a subdivide-then-smooth run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Number of Laplacian smoothing passes after subdivision
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Blend factor toward the neighbor mean, within [0, 1]
    #[serde(default = "default_factor")]
    pub factor: f64,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_factor() -> f64 {
    DEFAULT_FACTOR
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            factor: DEFAULT_FACTOR,
        }
    }
}

impl RefineConfig {
    /// Create a new configuration
    pub fn new(iterations: u32, factor: f64) -> Self {
        Self { iterations, factor }
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RefineError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            RefineError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            RefineError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            RefineError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Check that the parameters are usable
    pub fn validate(&self) -> Result<()> {
        validate_factor(self.factor)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, iterations: Option<u32>, factor: Option<f64>) -> Self {
        if let Some(iterations) = iterations {
            self.iterations = iterations;
        }
        if let Some(factor) = factor {
            self.factor = factor;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RefineConfig::default();
        assert_eq!(config.iterations, 4);
        assert_eq!(config.factor, 0.6);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RefineConfig = serde_json::from_str(r#"{ "iterations": 10 }"#).unwrap();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.factor, DEFAULT_FACTOR);

        let config: RefineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RefineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = RefineConfig::default().with_overrides(None, Some(0.25));
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.factor, 0.25);

        let config = RefineConfig::new(1, 0.1).with_overrides(Some(7), None);
        assert_eq!(config, RefineConfig::new(7, 0.1));
    }

    #[test]
    fn test_invalid_factor() {
        assert!(RefineConfig::new(4, 1.5).validate().is_err());
        assert!(RefineConfig::new(4, 1.0).validate().is_ok());
        assert!(RefineConfig::new(0, 0.0).validate().is_ok());
    }
}
