//! Configuration system for the spacing solver.
//!
//! Load solver configuration from TOML or YAML files to control the row
//! alphabet, left-boundary handling, and placement assertions without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use spacing_config::{EnvironmentMode, LeftBoundaryPolicy, SpacingConfig};
//!
//! let config = SpacingConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     left_boundary = "reject"
//!
//!     [alphabet]
//!     occupied = "o"
//!     empty = "_"
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.left_boundary, LeftBoundaryPolicy::Reject);
//! assert_eq!(config.alphabet.occupied, 'o');
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use spacing_config::SpacingConfig;
//!
//! let config = SpacingConfig::load("spacing.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use spacing_core::Alphabet;
use thiserror::Error;

#[cfg(test)]
mod tests;

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

/// Main spacing solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SpacingConfig {
    /// Environment mode controlling placement assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// How a progression starting left of the row is treated.
    #[serde(default)]
    pub left_boundary: LeftBoundaryPolicy,

    /// Symbols used to decode textual rows.
    #[serde(default)]
    pub alphabet: Alphabet,
}

impl SpacingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// fails validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the left-boundary policy.
    pub fn with_left_boundary(mut self, policy: LeftBoundaryPolicy) -> Self {
        self.left_boundary = policy;
        self
    }

    /// Sets the row alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Checks that the alphabet can decode rows unambiguously.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacing_config::SpacingConfig;
    /// use spacing_core::Alphabet;
    ///
    /// let config = SpacingConfig::new().with_alphabet(Alphabet::new('x', 'x'));
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Alphabet { occupied, empty } = self.alphabet;
        if self.alphabet.is_ambiguous() {
            return Err(ConfigError::Invalid(format!(
                "occupied and empty symbols must differ (both are {occupied:?})"
            )));
        }
        if occupied.is_whitespace() || empty.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "alphabet symbols must not be whitespace (occupied {occupied:?}, empty {empty:?})"
            )));
        }
        Ok(())
    }

    /// Returns `true` if placements should be verified after solving.
    pub fn asserts_placements(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Trust the placement arithmetic.
    #[default]
    NonAsserting,

    /// Verify every placement before reporting it.
    FullAssert,
}

/// Treatment of a target progression that starts before index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftBoundaryPolicy {
    /// Only the first-ball space check and the right boundary are enforced.
    #[default]
    Unchecked,

    /// A negative start position is infeasible as well.
    Reject,
}
