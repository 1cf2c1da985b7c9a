//! Placement engine (C7): Best-Fit-Decreasing packing with unlimited,
//! dynamically provisioned supply.
//!
//! Phase A places shared-cut chains (highest-savings order, as produced by
//! the chain builder); Phase B places every remaining single part instance,
//! longest first. Both phases share the same best-fit bar search and the
//! same dynamic-provisioning fallback, so a chain and a lone part are never
//! treated inconsistently.

use std::collections::{BTreeMap, VecDeque};

use crate::constants::EngineConstants;
use crate::enums::WarningKind;
use crate::errors::LogicFault;
use crate::logging::{AppLogger, LogLevel};
use crate::models::material::{Material, MaterialId, MaterialInstance};
use crate::models::part::{PartId, PartInstance};
use crate::models::placement::{PlacedPart, SharedCutInfo};
use crate::models::result::Warning;
use crate::models::settings::CuttingSettings;
use crate::models::shared_cut::SharedCutChain;

/// A synthetic material id used when the caller supplies no stock types at
/// all. Chosen far from the range catalog-assigned ids occupy in practice.
const AUTO_MATERIAL_ID: MaterialId = MaterialId::MAX;

pub struct PlacementOutput {
    pub bars: Vec<MaterialInstance>,
    pub warnings: Vec<Warning>,
}

struct BarPool {
    bars: Vec<MaterialInstance>,
    next_instance_index: BTreeMap<MaterialId, u32>,
    /// Bar indices in the chronological order they first received a part,
    /// so the caller can report `materialUsagePlans` by first-used order
    /// rather than by spawn order (the two differ whenever a later-spawned
    /// bar of one material is used before an earlier-spawned bar of
    /// another).
    used_order: Vec<usize>,
}

impl BarPool {
    /// Records `index` as having just received its first placed part.
    /// Called exactly once per bar, since a bar only transitions out of
    /// `is_empty()` once it has received at least one part.
    fn mark_used(&mut self, index: usize) {
        self.used_order.push(index);
    }

    fn spawn(&mut self, material: &Material) -> usize {
        let index = self.next_instance_index.entry(material.id).or_insert(0);
        let instance_index = *index;
        *index += 1;
        self.bars
            .push(MaterialInstance::new(material.id, instance_index, material.length));
        AppLogger::log(
            LogLevel::Debug,
            &format!(
                "provisioned bar material={} instance={} length={}",
                material.id, instance_index, material.length
            ),
        );
        self.bars.len() - 1
    }

    /// Finds the best-fit bar for a placement requiring `required(bar)`
    /// length, among bars not yet sealed. Ties broken by: non-empty over
    /// empty, longer source length, lowest instance index.
    fn best_fit(&self, required: impl Fn(&MaterialInstance) -> f64) -> Option<usize> {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, bar)| !matches!(bar.state, crate::models::material::BarState::Sealed))
            .filter_map(|(i, bar)| {
                let need = required(bar);
                if bar.remaining() >= need {
                    Some((i, bar.remaining() - need, bar))
                } else {
                    None
                }
            })
            .min_by(|(_, slack_a, bar_a), (_, slack_b, bar_b)| {
                slack_a
                    .partial_cmp(slack_b)
                    .unwrap()
                    .then(bar_a.is_empty().cmp(&bar_b.is_empty()))
                    .then(bar_b.length.partial_cmp(&bar_a.length).unwrap())
                    .then(bar_a.material_id.cmp(&bar_b.material_id))
                    .then(bar_a.instance_index.cmp(&bar_b.instance_index))
            })
            .map(|(i, _, _)| i)
    }

    /// Picks the shortest stock type that can hold `needed_capacity`,
    /// spawning a fresh instance of it. Falls back to an auto-sized type
    /// when no catalog material qualifies.
    fn provision(
        &mut self,
        materials: &[Material],
        needed_capacity: f64,
        warnings: &mut Vec<Warning>,
    ) -> usize {
        let qualifying = materials
            .iter()
            .filter(|m| m.length >= needed_capacity)
            .min_by(|a, b| a.length.partial_cmp(&b.length).unwrap());

        match qualifying {
            Some(material) => self.spawn(material),
            None => {
                let length = needed_capacity.max(EngineConstants::AUTO_MATERIAL_MIN_LENGTH);
                warnings.push(Warning::new(
                    WarningKind::AutoProvisionedMaterial,
                    format!("no catalog material fit a requirement of {needed_capacity}; auto-provisioned a {length}-length bar"),
                ));
                self.spawn(&Material::new(AUTO_MATERIAL_ID, length))
            }
        }
    }
}

fn chain_required(chain: &SharedCutChain, settings: &CuttingSettings, bar_empty: bool) -> f64 {
    let gap = if bar_empty { settings.front_cutting_loss } else { settings.cutting_loss };
    let n = chain.len() as f64;
    (gap + chain.total_length + (n - 1.0) * settings.cutting_loss - chain.total_savings).max(0.0)
}

fn single_required(length: f64, settings: &CuttingSettings, bar_empty: bool) -> f64 {
    let front = if bar_empty { settings.front_cutting_loss } else { 0.0 };
    length + settings.cutting_loss + front
}

/// Places `instances` and `chains` onto bars spawned from `materials`
/// (auto-provisioning a default type when `materials` is empty), per §4.5.
/// Never fails to place a valid instance; panics with a `LogicFault` if the
/// completeness invariant cannot be satisfied, which indicates a bug.
pub fn place(
    instances: &[PartInstance],
    materials: &[Material],
    chains: &[SharedCutChain],
    settings: &CuttingSettings,
) -> PlacementOutput {
    let mut warnings = Vec::new();

    let longest_instance = instances.iter().map(|i| i.length).fold(0.0, f64::max);
    let auto_material = Material::new(
        AUTO_MATERIAL_ID,
        (longest_instance + settings.front_cutting_loss + settings.cutting_loss)
            .max(EngineConstants::AUTO_MATERIAL_MIN_LENGTH),
    );
    let working_materials: Vec<Material> = if materials.is_empty() {
        warnings.push(Warning::new(
            WarningKind::AutoProvisionedMaterial,
            "material catalog was empty; auto-provisioned a default stock type".to_string(),
        ));
        vec![auto_material]
    } else {
        materials.to_vec()
    };

    let mut pool = BarPool {
        bars: Vec::new(),
        next_instance_index: BTreeMap::new(),
        used_order: Vec::new(),
    };
    for material in &working_materials {
        for _ in 0..EngineConstants::INITIAL_BARS_PER_MATERIAL {
            if material.supply.allows(*pool.next_instance_index.get(&material.id).unwrap_or(&0)) {
                pool.spawn(material);
            }
        }
    }

    // Group instances by part id so chain placement can pop the
    // lowest-index unused instance of each constituent part type.
    let mut available: BTreeMap<PartId, VecDeque<PartInstance>> = BTreeMap::new();
    for instance in instances {
        available.entry(instance.part_id).or_default().push_back(*instance);
    }

    let min_part_length = instances.iter().map(|i| i.length).fold(f64::INFINITY, f64::min);
    let min_part_length = if min_part_length.is_finite() { min_part_length } else { 0.0 };

    for chain in chains {
        let required_for: Vec<PartInstance> = chain
            .part_ids
            .iter()
            .map(|id| {
                available
                    .get_mut(id)
                    .and_then(|q| q.pop_front())
                    .unwrap_or_else(|| {
                        panic!(
                            "{}",
                            LogicFault::IncompletePlacement {
                                placed: 0,
                                expected: 0
                            }
                        )
                    })
            })
            .collect();

        let bar_index = pool
            .best_fit(|bar| chain_required(chain, settings, bar.is_empty()))
            .unwrap_or_else(|| {
                let needed = chain_required(chain, settings, true);
                pool.provision(&working_materials, needed, &mut warnings)
            });

        let bar = &mut pool.bars[bar_index];
        let was_empty = bar.is_empty();
        let start = if was_empty {
            settings.front_cutting_loss
        } else {
            bar.used_length + settings.cutting_loss
        };

        let mut cursor = start;
        let mut placed_parts = Vec::with_capacity(required_for.len());
        for (position_in_chain, instance) in required_for.iter().enumerate() {
            let prev_savings = (position_in_chain > 0)
                .then(|| chain.connections[position_in_chain - 1].savings);
            let next_savings = (position_in_chain < chain.connections.len())
                .then(|| chain.connections[position_in_chain].savings);

            placed_parts.push(PlacedPart {
                part_id: instance.part_id,
                part_instance_index: instance.instance_index,
                material_id: bar.material_id,
                material_instance_index: bar.instance_index,
                position: cursor,
                length: instance.length,
                shared_cut_info: Some(SharedCutInfo {
                    chain_id: chain.id,
                    position_in_chain,
                    prev_savings,
                    next_savings,
                }),
            });

            cursor += instance.length;
            if position_in_chain < chain.connections.len() {
                cursor += settings.cutting_loss - chain.connections[position_in_chain].savings;
            }
        }

        bar.commit(cursor, placed_parts, min_part_length);
        if was_empty {
            pool.mark_used(bar_index);
        }
    }

    // Phase B: everything not consumed by a chain, longest first.
    let mut remaining: Vec<PartInstance> = available.into_values().flatten().collect();
    remaining.sort_by(|a, b| {
        b.length
            .partial_cmp(&a.length)
            .unwrap()
            .then(a.part_id.cmp(&b.part_id))
            .then(a.instance_index.cmp(&b.instance_index))
    });

    for instance in &remaining {
        let bar_index = pool
            .best_fit(|bar| single_required(instance.length, settings, bar.is_empty()))
            .unwrap_or_else(|| {
                let needed = single_required(instance.length, settings, true);
                pool.provision(&working_materials, needed, &mut warnings)
            });

        let bar = &mut pool.bars[bar_index];
        let was_empty = bar.is_empty();
        let position = if was_empty {
            settings.front_cutting_loss
        } else {
            bar.used_length + settings.cutting_loss
        };

        let placed = PlacedPart {
            part_id: instance.part_id,
            part_instance_index: instance.instance_index,
            material_id: bar.material_id,
            material_instance_index: bar.instance_index,
            position,
            length: instance.length,
            shared_cut_info: None,
        };

        bar.commit(position + instance.length, vec![placed], min_part_length);
        if was_empty {
            pool.mark_used(bar_index);
        }
    }

    let placed_count: usize = pool.bars.iter().map(|b| b.placed_parts.len()).sum();
    if placed_count != instances.len() {
        panic!(
            "{}",
            LogicFault::IncompletePlacement {
                placed: placed_count,
                expected: instances.len(),
            }
        );
    }

    for bar in &pool.bars {
        if bar.used_length > bar.length {
            panic!(
                "{}",
                LogicFault::BarOverflow {
                    material_id: bar.material_id,
                    instance_index: bar.instance_index,
                    used: bar.used_length,
                    length: bar.length,
                }
            );
        }
        if !bar.is_empty() && bar.remaining() < min_part_length {
            AppLogger::log(
                LogLevel::Debug,
                &format!(
                    "bar material={} instance={} sealed with {} remaining",
                    bar.material_id,
                    bar.instance_index,
                    bar.remaining()
                ),
            );
        }
    }

    // Reorder by first-used order rather than spawn order: the initial
    // seeding loop spawns one idle bar per material type up front, so a
    // later-spawned bar can still be used before an earlier-spawned one of
    // a different material type.
    let mut bars_by_index: Vec<Option<MaterialInstance>> = pool.bars.into_iter().map(Some).collect();
    let mut ordered_bars = Vec::with_capacity(bars_by_index.len());
    for index in pool.used_order {
        if let Some(bar) = bars_by_index[index].take() {
            ordered_bars.push(bar);
        }
    }
    for slot in bars_by_index.into_iter().flatten() {
        ordered_bars.push(slot);
    }

    PlacementOutput {
        bars: ordered_bars,
        warnings,
    }
}
