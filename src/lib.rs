//! 1D cutting-stock optimizer with shared-cut (bevel-sharing) chain packing.
//!
//! Callers build up demand through [`models::PartCatalog`] and
//! [`models::MaterialCatalog`], optionally tune [`models::CuttingSettings`],
//! and call [`optimizer::optimize`] to get back a [`models::CuttingResult`].

pub mod angle_matcher;
pub mod chain_builder;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod instance_expander;
pub mod logging;
pub mod match_index;
pub mod models;
pub mod optimizer;
pub mod placement_engine;
pub mod result_aggregator;

pub use errors::{OptimizerError, Result};
pub use optimizer::optimize;
