//! Output types for a completed optimization run (C8).

use serde::{Deserialize, Serialize};

use crate::enums::WarningKind;
use crate::models::material::MaterialInstance;
use crate::models::part::InvalidPart;
use crate::models::shared_cut::SharedCutChain;

/// A bar's final plan: which material it was spawned from, what got placed
/// on it, and how much of it is used. Identical in shape to the engine's
/// internal [`MaterialInstance`] bookkeeping — the distinction is that this
/// is what the caller gets back, immutable, after the run completes.
pub type MaterialUsagePlan = MaterialInstance;

/// A soft-failure condition, accumulated rather than raised. Distinct from
/// [`crate::errors::OptimizerError`]: these are data the caller inspects,
/// not a propagated error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Percentage-formatted headline numbers, for formatters that want a
/// ready-to-display string rather than raw ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub material_utilization: String,
}

/// The complete output of one [`crate::optimizer::optimize`] run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingResult {
    /// Sorted by first-used order.
    pub material_usage_plans: Vec<MaterialUsagePlan>,
    pub chains: Vec<SharedCutChain>,
    pub invalid_parts: Vec<InvalidPart>,
    pub total_materials_used: usize,
    pub total_waste_length: f64,
    pub overall_utilization: f64,
    pub total_savings_from_shared_cuts: f64,
    pub all_parts_placed: bool,
    pub unplaced_parts: usize,
    pub warnings: Vec<Warning>,
    pub summary: ResultSummary,
}
