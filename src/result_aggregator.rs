//! Result aggregator (C8): rolls placement output up into the headline
//! numbers and warnings a caller sees.

use crate::constants::EngineConstants;
use crate::enums::WarningKind;
use crate::models::material::MaterialInstance;
use crate::models::part::InvalidPart;
use crate::models::result::{CuttingResult, ResultSummary, Warning};
use crate::models::shared_cut::SharedCutChain;

/// Builds the final [`CuttingResult`] from a completed placement run.
/// `total_requested` is the number of part instances that were demanded of
/// the placer, used only to confirm the completeness guarantee; the
/// placement engine itself is responsible for making that guarantee hold.
pub fn aggregate(
    bars: Vec<MaterialInstance>,
    chains: Vec<SharedCutChain>,
    invalid_parts: Vec<InvalidPart>,
    total_requested: usize,
    mut warnings: Vec<Warning>,
) -> CuttingResult {
    let used_bars: Vec<&MaterialInstance> = bars.iter().filter(|b| !b.is_empty()).collect();

    let total_stock_length: f64 = used_bars.iter().map(|b| b.length).sum();
    let total_used_length: f64 = used_bars.iter().map(|b| b.used_length).sum();
    let total_waste_length: f64 = used_bars.iter().map(|b| b.remaining()).sum();
    let overall_utilization = if total_stock_length > 0.0 {
        total_used_length / total_stock_length
    } else {
        0.0
    };
    let total_savings_from_shared_cuts: f64 = chains.iter().map(|c| c.total_savings).sum();

    for bar in &used_bars {
        let utilization = bar.used_length / bar.length;
        if utilization < EngineConstants::LOW_UTILIZATION_THRESHOLD {
            warnings.push(Warning::new(
                WarningKind::LowUtilization,
                format!(
                    "bar {}#{} used only {:.1}% of its length",
                    bar.material_id,
                    bar.instance_index,
                    utilization * 100.0
                ),
            ));
        }
        if matches!(bar.state, crate::models::material::BarState::Sealed) && bar.remaining() > 0.0 {
            warnings.push(Warning::new(
                WarningKind::Fragmentation,
                format!(
                    "bar {}#{} sealed with {} unusable remaining",
                    bar.material_id,
                    bar.instance_index,
                    bar.remaining()
                ),
            ));
        }
    }

    let placed_count: usize = used_bars.iter().map(|b| b.placed_parts.len()).sum();
    let all_parts_placed = placed_count == total_requested;
    let unplaced_parts = total_requested.saturating_sub(placed_count);

    let material_usage_plans: Vec<MaterialInstance> = used_bars.into_iter().cloned().collect();
    let total_materials_used = material_usage_plans.len();

    CuttingResult {
        material_usage_plans,
        chains,
        invalid_parts,
        total_materials_used,
        total_waste_length,
        overall_utilization,
        total_savings_from_shared_cuts,
        all_parts_placed,
        unplaced_parts,
        warnings,
        summary: ResultSummary {
            material_utilization: format!("{:.1}%", overall_utilization * 100.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::placement::PlacedPart;

    fn bar_with(material_id: u64, length: f64, used: f64) -> MaterialInstance {
        let mut bar = MaterialInstance::new(material_id, 0, length);
        bar.commit(
            used,
            vec![PlacedPart {
                part_id: 1,
                part_instance_index: 0,
                material_id,
                material_instance_index: 0,
                position: 0.0,
                length: used,
                shared_cut_info: None,
            }],
            0.0,
        );
        bar
    }

    #[test]
    fn utilization_and_waste_computed_over_used_bars_only() {
        let used = bar_with(1, 1000.0, 800.0);
        let unused = MaterialInstance::new(2, 0, 1000.0);
        let result = aggregate(vec![used, unused], vec![], vec![], 1, vec![]);
        assert_eq!(result.total_materials_used, 1);
        assert!((result.total_waste_length - 200.0).abs() < 1e-9);
        assert!((result.overall_utilization - 0.8).abs() < 1e-9);
    }

    #[test]
    fn low_utilization_warns() {
        let used = bar_with(1, 1000.0, 100.0);
        let result = aggregate(vec![used], vec![], vec![], 1, vec![]);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::LowUtilization));
    }

    #[test]
    fn completeness_flags_match_counts() {
        let used = bar_with(1, 1000.0, 800.0);
        let result = aggregate(vec![used], vec![], vec![], 1, vec![]);
        assert!(result.all_parts_placed);
        assert_eq!(result.unplaced_parts, 0);
    }

    #[test]
    fn summary_string_is_percentage_formatted() {
        let used = bar_with(1, 1000.0, 500.0);
        let result = aggregate(vec![used], vec![], vec![], 1, vec![]);
        assert_eq!(result.summary.material_utilization, "50.0%");
    }
}
