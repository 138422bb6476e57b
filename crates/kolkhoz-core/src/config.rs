//! Configuration loading and typed config structures for the Kolkhoz
//! simulation.
//!
//! The canonical configuration lives in `kolkhoz-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and a loader that reads and parses the file. Every section and
//! every field is optional.

use std::path::Path;

use serde::Deserialize;

use kolkhoz_planning::DemandThresholds;
use kolkhoz_types::{Difficulty, Era};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `kolkhoz-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Settlement name, starting era, difficulty.
    #[serde(default)]
    pub world: WorldConfig,

    /// Calendar and five-year-plan timing.
    #[serde(default)]
    pub plan: PlanConfig,

    /// Demand detector thresholds.
    #[serde(default)]
    pub demand: DemandThresholds,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Settlement-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable settlement name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Era the campaign starts in.
    #[serde(default = "default_starting_era")]
    pub starting_era: Era,

    /// Difficulty tier scaling plan quotas.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            starting_era: default_starting_era(),
            difficulty: Difficulty::default(),
        }
    }
}

/// Calendar and plan-period configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanConfig {
    /// Simulation ticks in one calendar year.
    #[serde(default = "default_ticks_per_year")]
    pub ticks_per_year: u64,

    /// Calendar years in one plan period.
    #[serde(default = "default_years_per_plan")]
    pub years_per_plan: u64,

    /// Calendar year at tick 0.
    #[serde(default = "default_start_year")]
    pub start_year: u64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            ticks_per_year: default_ticks_per_year(),
            years_per_plan: default_years_per_plan(),
            start_year: default_start_year(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log records as JSON objects instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (used by serde)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Red Dawn Kolkhoz".to_owned()
}

const fn default_starting_era() -> Era {
    Era::Revolution
}

const fn default_ticks_per_year() -> u64 {
    12
}

const fn default_years_per_plan() -> u64 {
    5
}

const fn default_start_year() -> u64 {
    1922
}

fn default_log_level() -> String {
    "info".to_owned()
}
