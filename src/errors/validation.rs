//! Errors raised while ingesting materials and parts into a catalog.

use thiserror::Error;

/// Errors raised by [`crate::models::catalog::MaterialCatalog`] and
/// [`crate::models::catalog::PartCatalog`] while validating inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("material length must be positive and finite, got {length}")]
    InvalidMaterialLength { length: f64 },

    #[error("a material with length {length} already exists in the catalog")]
    DuplicateMaterialLength { length: f64 },

    #[error("part length must be positive and finite, got {length}")]
    InvalidPartLength { length: f64 },

    #[error("part thickness must be positive and finite, got {thickness}")]
    InvalidPartThickness { thickness: f64 },

    #[error("part quantity must be a non-negative integer, got {quantity}")]
    InvalidPartQuantity { quantity: i64 },

    #[error("bevel angle {angle} is out of range [0, 90)")]
    AngleOutOfRange { angle: f64 },

    #[error("left side of the part has both top and bottom bevels (topLeft={top_left}, bottomLeft={bottom_left})")]
    LeftSideConflict { top_left: f64, bottom_left: f64 },

    #[error("right side of the part has both top and bottom bevels (topRight={top_right}, bottomRight={bottom_right})")]
    RightSideConflict { top_right: f64, bottom_right: f64 },
}
