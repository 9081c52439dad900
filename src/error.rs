use thiserror::Error;

use crate::ik::ChainError;

/// Top-level error type for spider-ik.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Leg {leg}: {source}")]
    Leg { leg: usize, source: ChainError },

    #[error("Leg {leg}: initial target coincides with the leg's root")]
    TargetOnRoot { leg: usize },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid num_legs: {0} (must be in 1..={max})", max = crate::creature::config::MAX_LEGS)]
    InvalidLegCount(usize),

    #[error("Invalid joints_per_leg: {0} (must be in 2..={max})", max = crate::creature::config::MAX_JOINTS_PER_LEG)]
    InvalidJointCount(usize),

    #[error("Invalid segment_length: {0} (must be finite and > 0)")]
    InvalidSegmentLength(f32),

    #[error("Invalid iterations: must be >= 1")]
    ZeroIterations,

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
