//! Configuration system for HanoiForge.
//!
//! Load runner configuration from TOML or YAML files to control the disk
//! bound, timing precision, tower roles and move checking without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use hanoiforge_config::{EnvironmentMode, RunnerConfig};
//! use hanoiforge_core::TowerId;
//!
//! let config = RunnerConfig::from_toml_str(r#"
//!     max_disks = 12
//!     environment_mode = "full_assert"
//!
//!     [roles]
//!     source = "A"
//!     auxiliary = "C"
//!     destination = "B"
//! "#).unwrap();
//!
//! assert_eq!(config.max_disks, 12);
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.tower_roles().unwrap().destination(), TowerId::B);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use hanoiforge_config::RunnerConfig;
//!
//! let config = RunnerConfig::load("hanoi.toml").unwrap_or_default();
//! assert_eq!(config.max_disks, 20);
//! ```

use std::path::Path;

use hanoiforge_core::{TowerId, TowerRoles, MAX_DISKS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main runner configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RunnerConfig {
    /// Largest accepted disk count, at most 20.
    pub max_disks: u8,

    /// Significant digits for the timing figures.
    pub significant_digits: usize,

    /// Environment mode affecting move checking.
    pub environment_mode: EnvironmentMode,

    /// Tower role assignment shared by both solvers.
    pub roles: RolesConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_disks: MAX_DISKS,
            significant_digits: 5,
            environment_mode: EnvironmentMode::default(),
            roles: RolesConfig::default(),
        }
    }
}

impl RunnerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or holds
    /// out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the largest accepted disk count.
    pub fn with_max_disks(mut self, max_disks: u8) -> Self {
        self.max_disks = max_disks;
        self
    }

    /// Sets the significant digits of the timing figures.
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the tower roles.
    pub fn with_roles(mut self, roles: TowerRoles) -> Self {
        self.roles = RolesConfig::from(roles);
        self
    }

    /// Checks every field is in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoiforge_config::RunnerConfig;
    ///
    /// assert!(RunnerConfig::new().validate().is_ok());
    /// assert!(RunnerConfig::new().with_max_disks(21).validate().is_err());
    /// assert!(RunnerConfig::new().with_significant_digits(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_disks == 0 || self.max_disks > MAX_DISKS {
            return Err(ConfigError::Invalid(format!(
                "max_disks must be between 1 and {MAX_DISKS}, got {}",
                self.max_disks
            )));
        }
        if self.significant_digits == 0 || self.significant_digits > 17 {
            return Err(ConfigError::Invalid(format!(
                "significant_digits must be between 1 and 17, got {}",
                self.significant_digits
            )));
        }
        self.tower_roles()?;
        Ok(())
    }

    /// Returns the configured tower roles.
    pub fn tower_roles(&self) -> Result<TowerRoles, ConfigError> {
        TowerRoles::new(self.roles.source, self.roles.auxiliary, self.roles.destination)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

/// Environment mode affecting runner behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Trust the solvers; no replay.
    #[default]
    Fast,

    /// Replay every emitted move against shadow towers.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if moves are replayed and checked.
    pub fn is_asserted(self) -> bool {
        matches!(self, Self::FullAssert)
    }
}

/// Tower labels for each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RolesConfig {
    pub source: TowerId,
    pub auxiliary: TowerId,
    pub destination: TowerId,
}

impl Default for RolesConfig {
    fn default() -> Self {
        TowerRoles::default().into()
    }
}

impl From<TowerRoles> for RolesConfig {
    fn from(roles: TowerRoles) -> Self {
        Self {
            source: roles.source(),
            auxiliary: roles.auxiliary(),
            destination: roles.destination(),
        }
    }
}

#[cfg(test)]
mod tests;
