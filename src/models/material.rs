//! Stock bar types and the concrete bar instances spawned from them (C6).

use serde::{Deserialize, Serialize};

use crate::enums::Supply;
use crate::models::placement::PlacedPart;

pub type MaterialId = u64;

/// A stock bar type: a fixed length, available in finite or unlimited
/// supply. Multiple types may coexist; lengths are unique within a
/// user-supplied catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub length: f64,
    pub supply: Supply,
}

impl Material {
    pub fn new(id: MaterialId, length: f64) -> Self {
        Self {
            id,
            length,
            supply: Supply::Unlimited,
        }
    }
}

/// Lifecycle state of a [`MaterialInstance`]. Transitions only move forward:
/// `Empty -> Partial -> Sealed`. Once sealed, a bar is never offered again
/// by the best-fit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarState {
    Empty,
    Partial,
    Sealed,
}

/// A concrete bar spawned from a [`Material`] type, identified by
/// `(material_id, instance_index)`.
///
/// Invariant: `used_length <= length`; placed parts never overlap; their
/// positions are strictly non-decreasing in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInstance {
    pub material_id: MaterialId,
    pub instance_index: u32,
    pub length: f64,
    pub used_length: f64,
    pub placed_parts: Vec<PlacedPart>,
    pub state: BarState,
}

impl MaterialInstance {
    pub fn new(material_id: MaterialId, instance_index: u32, length: f64) -> Self {
        Self {
            material_id,
            instance_index,
            length,
            used_length: 0.0,
            placed_parts: Vec::new(),
            state: BarState::Empty,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.length - self.used_length
    }

    pub fn is_empty(&self) -> bool {
        self.placed_parts.is_empty()
    }

    /// Advances `used_length` and appends `parts`, then recomputes the bar
    /// state. `min_part_length` is the smallest remaining part length the
    /// caller might still try to place; once remaining space drops below
    /// it, the bar seals and is no longer offered to the placer.
    pub fn commit(&mut self, new_used_length: f64, parts: Vec<PlacedPart>, min_part_length: f64) {
        debug_assert!(new_used_length >= self.used_length);
        self.used_length = new_used_length;
        self.placed_parts.extend(parts);
        self.state = if self.remaining() < min_part_length {
            BarState::Sealed
        } else if self.is_empty() {
            BarState::Empty
        } else {
            BarState::Partial
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_tracks_used_length() {
        let mut bar = MaterialInstance::new(1, 0, 1000.0);
        assert_eq!(bar.remaining(), 1000.0);
        bar.commit(500.0, Vec::new(), 0.0);
        assert_eq!(bar.remaining(), 500.0);
    }

    #[test]
    fn seals_when_remaining_too_small() {
        let mut bar = MaterialInstance::new(1, 0, 1000.0);
        bar.commit(995.0, Vec::new(), 10.0);
        assert_eq!(bar.state, BarState::Sealed);
    }

    #[test]
    fn stays_partial_above_threshold() {
        let mut bar = MaterialInstance::new(1, 0, 1000.0);
        let part = PlacedPart {
            part_id: 1,
            part_instance_index: 0,
            material_id: 1,
            material_instance_index: 0,
            position: 10.0,
            length: 490.0,
            shared_cut_info: None,
        };
        bar.commit(500.0, vec![part], 10.0);
        assert_eq!(bar.state, BarState::Partial);
    }
}
