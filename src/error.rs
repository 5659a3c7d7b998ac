//! Errors raised while building a scene or loading configuration.
//!
//! Nothing in the per-frame path returns an error; bad inputs are rejected here,
//! once, at startup.

use thiserror::Error;

/// Rejected wall definitions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    /// A wall has a NaN or infinite coordinate or extent.
    #[error("wall {index} has a non-finite origin or size")]
    NonFiniteWall { index: usize },
    /// A wall has zero or negative width/height.
    #[error("wall {index} has degenerate size {width}x{height}")]
    DegenerateWall {
        index: usize,
        width: f32,
        height: f32,
    },
}

/// Rejected configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field is out of its valid range.
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::InvalidValue { field, reason }
    }
}
