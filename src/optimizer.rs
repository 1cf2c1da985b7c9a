//! Public entry point: wires the catalog layer through chain building and
//! placement into a finished [`CuttingResult`].

use crate::chain_builder::build_chains;
use crate::instance_expander::expand_instances;
use crate::logging::{AppLogger, LogLevel};
use crate::models::catalog::{MaterialCatalog, PartCatalog};
use crate::models::material::Material;
use crate::models::part::Part;
use crate::models::result::CuttingResult;
use crate::models::settings::CuttingSettings;
use crate::placement_engine::place;
use crate::result_aggregator::aggregate;

/// Runs one full optimization pass over `parts` and `materials` under
/// `settings`. Parts are validated at catalog ingestion time
/// ([`PartCatalog::add_part`]), so every part reaching this function is
/// already well-formed; `invalid_parts` on the result is always empty for
/// this entry point and exists for shape-compatibility with callers that
/// assemble a [`crate::models::part::InvalidPart`] list some other way.
///
/// Never fails on valid input: an empty material catalog auto-provisions a
/// default stock type, and the placer provisions additional bars on demand.
pub fn optimize(
    parts: &PartCatalog,
    materials: &MaterialCatalog,
    settings: &CuttingSettings,
) -> CuttingResult {
    let parts_vec: Vec<Part> = parts.iter().cloned().collect();
    let materials_vec: Vec<Material> = materials.iter().cloned().collect();
    let total_requested: usize = parts_vec.iter().map(|p| p.quantity as usize).sum();

    AppLogger::log(
        LogLevel::Info,
        &format!(
            "optimizing {} part types ({} instances) against {} material types",
            parts_vec.len(),
            total_requested,
            materials_vec.len()
        ),
    );

    let instances = expand_instances(&parts_vec);
    let chain_result = build_chains(&parts_vec, settings.angle_tolerance, settings.max_chain_length);

    AppLogger::log(
        LogLevel::Debug,
        &format!(
            "built {} chains, {} parts unchained, {:.3} total chain savings",
            chain_result.chains.len(),
            chain_result.remaining.len(),
            chain_result.total_savings
        ),
    );

    let placement = place(&instances, &materials_vec, &chain_result.chains, settings);

    aggregate(
        placement.bars,
        chain_result.chains,
        Vec::new(),
        total_requested,
        placement.warnings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::PartAngles;

    #[test]
    fn optimize_places_every_part_with_auto_provisioned_material() {
        let mut parts = PartCatalog::new();
        parts.add_part(1200.0, 3, PartAngles::square(), 10.0).unwrap();
        let materials = MaterialCatalog::new();
        let settings = CuttingSettings::default();

        let result = optimize(&parts, &materials, &settings);
        assert!(result.all_parts_placed);
        assert_eq!(result.unplaced_parts, 0);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.kind == crate::enums::WarningKind::AutoProvisionedMaterial));
    }

    #[test]
    fn optimize_uses_shared_cut_chains_when_angles_match() {
        let mut parts = PartCatalog::new();
        let angles = PartAngles {
            top_left: 45.0,
            ..PartAngles::square()
        };
        parts.add_part(1500.0, 2, angles, 10.0).unwrap();
        let mut materials = MaterialCatalog::new();
        materials.add_material(6000.0).unwrap();
        let settings = CuttingSettings::default();

        let result = optimize(&parts, &materials, &settings);
        assert!(result.total_savings_from_shared_cuts > 0.0);
        assert!(result.all_parts_placed);
    }

    #[test]
    fn optimize_is_deterministic_across_identical_runs() {
        let mut parts = PartCatalog::new();
        parts.add_part(733.0, 5, PartAngles::square(), 10.0).unwrap();
        let angles = PartAngles {
            top_left: 45.0,
            ..PartAngles::square()
        };
        parts.add_part(1500.0, 3, angles, 10.0).unwrap();
        let mut materials = MaterialCatalog::new();
        materials.add_material(6000.0).unwrap();
        materials.add_material(3000.0).unwrap();
        let settings = CuttingSettings::default();

        let a = optimize(&parts, &materials, &settings);
        let b = optimize(&parts, &materials, &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn optimize_on_empty_catalog_places_nothing() {
        let parts = PartCatalog::new();
        let materials = MaterialCatalog::new();
        let settings = CuttingSettings::default();

        let result = optimize(&parts, &materials, &settings);
        assert!(result.all_parts_placed);
        assert_eq!(result.total_materials_used, 0);
    }
}
