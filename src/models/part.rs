//! Parts: the angled pieces demanded from stock bars.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THICKNESS;

pub type PartId = u64;

/// The four corner bevel angles of a part, each in `[0, 90)`. `0` means a
/// square corner (no bevel).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartAngles {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl PartAngles {
    pub fn square() -> Self {
        Self {
            top_left: 0.0,
            top_right: 0.0,
            bottom_left: 0.0,
            bottom_right: 0.0,
        }
    }

    /// Corner angles indexed 0..4 in a fixed order: topLeft, topRight,
    /// bottomLeft, bottomRight. Position indices are used by the angle
    /// matcher (C2) for deterministic tie-breaking.
    pub fn by_position(&self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// A demanded part type: a length, a quantity, four corner angles, and a
/// thickness. Parts are immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub length: f64,
    pub quantity: u32,
    pub angles: PartAngles,
    pub thickness: f64,
}

impl Part {
    pub fn new(id: PartId, length: f64, quantity: u32, angles: PartAngles) -> Self {
        Self {
            id,
            length,
            quantity,
            angles,
            thickness: DEFAULT_THICKNESS,
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn has_usable_angles(&self) -> bool {
        crate::geometry::has_usable_angles(&self.angles)
    }
}

/// One concrete instance of a [`Part`], identified by its position within
/// the part's quantity. Expanding a part of `quantity = 3` yields instances
/// with `instance_index` 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartInstance {
    pub part_id: PartId,
    pub instance_index: u32,
    pub length: f64,
    pub angles: PartAngles,
    pub thickness: f64,
}

impl PartInstance {
    pub fn has_usable_angles(&self) -> bool {
        crate::geometry::has_usable_angles(&self.angles)
    }
}

/// A part that failed [`crate::geometry::validate_part_angles`] or basic
/// numeric validation. Collected and reported, never aborts the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidPart {
    pub part_id: PartId,
    pub violations: Vec<String>,
}
