//! Configuration module for Triage
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`TRIAGE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use triage::config::TriageConfig;
//!
//! // Load defaults
//! let config = TriageConfig::default();
//! assert_eq!(config.scoring.proficiency, 3.0);
//!
//! // Parse from TOML
//! let toml = r#"
//! [scoring]
//! proficiency = 5.0
//! "#;
//! let config: TriageConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.scoring.proficiency, 5.0);
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

// The scoring weights live with the scorer; they are part of the config
// surface the same way the routing weights are in the routing module.
pub use crate::assignment::ScoringWeights;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the triage engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TriageConfig {
    /// Scoring weights for the assignment heuristic
    pub scoring: ScoringWeights,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl TriageConfig {
    /// Load configuration from a TOML file.
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supports TRIAGE_* environment variables for logging settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("TRIAGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TRIAGE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }
        self
    }
}
