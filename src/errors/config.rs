//! Errors raised while constructing [`crate::models::settings::CuttingSettings`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("maxChainLength must be >= 2, got {value}")]
    InvalidMaxChainLength { value: u32 },

    #[error("angleTolerance must be >= 0, got {value}")]
    InvalidTolerance { value: f64 },

    #[error("frontCuttingLoss must be >= 0, got {value}")]
    InvalidFrontCuttingLoss { value: f64 },

    #[error("cuttingLoss must be >= 0, got {value}")]
    InvalidCuttingLoss { value: f64 },
}
