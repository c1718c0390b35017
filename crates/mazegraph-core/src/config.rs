//! Sizing configuration for the containers and graph algorithms.
//!
//! Every container starts from a small fixed allocation and grows by
//! doubling. [`ContainerConfig`] collects those starting sizes so callers can
//! tune them once and hand the result to [`crate::Graph::with_config`] or to
//! the individual `with_*` constructors.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Starting sizes for the growable containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    /// Number of buckets a fresh hash dictionary or hash set starts with.
    ///
    /// Default: 10.
    pub initial_bucket_count: usize,

    /// Number of slots a fresh priority queue reserves.
    ///
    /// Default: 100.
    pub initial_heap_capacity: usize,

    /// Number of pointer cells a fresh disjoint-set forest reserves.
    ///
    /// Default: 10.
    pub initial_forest_capacity: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: 10,
            initial_heap_capacity: 100,
            initial_forest_capacity: 10,
        }
    }
}

impl ContainerConfig {
    /// Parses a config from a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// [`ConfigError::ZeroCapacity`] if any size is zero.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every size is at least one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] naming the first zero field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_bucket_count == 0 {
            return Err(ConfigError::ZeroCapacity("initial_bucket_count"));
        }
        if self.initial_heap_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("initial_heap_capacity"));
        }
        if self.initial_forest_capacity == 0 {
            return Err(ConfigError::ZeroCapacity("initial_forest_capacity"));
        }
        Ok(())
    }
}

/// Errors that can occur while loading a [`ContainerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The input was not a valid config object.
    Parse(String),
    /// The named size field was zero.
    ZeroCapacity(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(detail) => write!(f, "invalid container config: {detail}"),
            Self::ZeroCapacity(field) => write!(f, "{field} must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
