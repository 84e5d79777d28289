//! Implied volatility solver configuration.
//!
//! Handles loading solver settings from TOML files and environment variables.
//! Every field has a default, so partial files and partial environments are
//! fine.

use std::path::Path;

use bs_core::math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "IMPLIED_VOL_";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A field violates its constraint.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Constraint that was violated
        reason: String,
    },

    /// The file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// An environment override could not be parsed.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Bracketing and convergence settings for implied volatility.
///
/// # Examples
/// ```
/// use bs_models::implied_vol::ImpliedVolConfig;
///
/// let config = ImpliedVolConfig::from_toml_str("upper_bound = 10.0").unwrap();
/// assert_eq!(config.upper_bound, 10.0);
/// assert_eq!(config.lower_bound, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpliedVolConfig {
    /// Initial (and fixed) lower volatility bound
    pub lower_bound: f64,
    /// Initial upper volatility bound, widened on demand
    pub upper_bound: f64,
    /// Multiplier applied to the upper bound on each widening
    pub widen_factor: f64,
    /// Maximum number of upper-bound widenings
    pub max_widenings: u32,
    /// Absolute price tolerance
    pub tolerance: f64,
    /// Brent iteration budget
    pub max_iterations: usize,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower_bound: 1e-6,
            upper_bound: 5.0,
            widen_factor: 2.0,
            max_widenings: 10,
            tolerance: 1e-8,
            max_iterations: 200,
        }
    }
}

impl ImpliedVolConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ImpliedVolConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from `IMPLIED_VOL_*` environment variables over
    /// the defaults.
    ///
    /// Recognised variables: `IMPLIED_VOL_LOWER_BOUND`,
    /// `IMPLIED_VOL_UPPER_BOUND`, `IMPLIED_VOL_WIDEN_FACTOR`,
    /// `IMPLIED_VOL_MAX_WIDENINGS`, `IMPLIED_VOL_TOLERANCE`,
    /// `IMPLIED_VOL_MAX_ITERATIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_from(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Apply overrides from a key lookup (keys without prefix, upper case).
    fn merge_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LOWER_BOUND") {
            self.lower_bound = parse_env("LOWER_BOUND", &v)?;
        }
        if let Some(v) = lookup("UPPER_BOUND") {
            self.upper_bound = parse_env("UPPER_BOUND", &v)?;
        }
        if let Some(v) = lookup("WIDEN_FACTOR") {
            self.widen_factor = parse_env("WIDEN_FACTOR", &v)?;
        }
        if let Some(v) = lookup("MAX_WIDENINGS") {
            self.max_widenings = parse_env("MAX_WIDENINGS", &v)?;
        }
        if let Some(v) = lookup("TOLERANCE") {
            self.tolerance = parse_env("TOLERANCE", &v)?;
        }
        if let Some(v) = lookup("MAX_ITERATIONS") {
            self.max_iterations = parse_env("MAX_ITERATIONS", &v)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lower_bound.is_finite() && self.lower_bound > 0.0) {
            return Err(invalid("lower_bound", "must be finite and positive"));
        }
        if !(self.upper_bound.is_finite() && self.upper_bound > self.lower_bound) {
            return Err(invalid("upper_bound", "must be finite and above lower_bound"));
        }
        if !(self.widen_factor.is_finite() && self.widen_factor > 1.0) {
            return Err(invalid("widen_factor", "must be finite and greater than 1"));
        }
        let widest = self.upper_bound * self.widen_factor.powf(f64::from(self.max_widenings));
        if !widest.is_finite() {
            return Err(invalid("max_widenings", "fully widened upper_bound must stay finite"));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid("tolerance", "must be finite and positive"));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be > 0"));
        }
        Ok(())
    }

    /// Brent settings derived from this configuration.
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}{}={:?}: {}", ENV_PREFIX, key, value, e)))
}
