//! Error handling module for the shared-cut optimizer.
//!
//! Errors are organized by domain and aggregated into one top-level
//! [`OptimizerError`]:
//! - [`ValidationError`]: malformed materials/parts, raised from catalog APIs.
//! - [`ConfigError`]: malformed cutting settings, raised from setters.
//! - [`LogicFault`]: the completeness invariant was violated post-placement;
//!   this indicates an implementation bug, not a user condition.

pub mod config;
pub mod logic;
pub mod validation;

pub use config::ConfigError;
pub use logic::LogicFault;
pub use validation::ValidationError;

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimizerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logic(#[from] LogicFault),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
