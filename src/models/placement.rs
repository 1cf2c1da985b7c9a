//! A part placed on a concrete bar (C6/C7 output).

use serde::{Deserialize, Serialize};

use crate::models::material::MaterialId;
use crate::models::part::PartId;
use crate::models::shared_cut::ChainId;

/// Where a placed part sits within a shared-cut chain, if it is in one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedCutInfo {
    pub chain_id: ChainId,
    pub position_in_chain: usize,
    /// Savings shared with the previous part in the chain, if any.
    pub prev_savings: Option<f64>,
    /// Savings shared with the next part in the chain, if any.
    pub next_savings: Option<f64>,
}

/// A part placed on a bar. Modeled as a tagged pair (standalone vs.
/// in-chain) via `shared_cut_info: Option<SharedCutInfo>` rather than a
/// separate flag plus optional fields that could disagree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPart {
    pub part_id: PartId,
    pub part_instance_index: u32,
    pub material_id: MaterialId,
    pub material_instance_index: u32,
    pub position: f64,
    pub length: f64,
    pub shared_cut_info: Option<SharedCutInfo>,
}

impl PlacedPart {
    pub fn is_in_shared_cut_chain(&self) -> bool {
        self.shared_cut_info.is_some()
    }

    pub fn end(&self) -> f64 {
        self.position + self.length
    }
}
