//! Shared-cut chain builder (C4): greedy seed-and-extend over the pairwise
//! match index.

use std::collections::{BTreeMap, BTreeSet};

use crate::match_index::build_match_index;
use crate::models::angle_match::AngleMatch;
use crate::models::part::{Part, PartId};
use crate::models::shared_cut::{ChainId, SharedCutChain, SharedCutConnection};

pub struct ChainBuildResult {
    pub chains: Vec<SharedCutChain>,
    /// Part ids that ended up in no chain: parts with no usable angles plus
    /// usable-angle parts that found no compatible partner.
    pub remaining: Vec<PartId>,
    pub total_savings: f64,
}

/// A neighbor reachable from a given part, with the angle match that would
/// connect them.
#[derive(Clone, Copy)]
struct Neighbor {
    part_id: PartId,
    angle_match: AngleMatch,
    /// True when `angle_match`'s position fields are from the neighbor's
    /// perspective (i.e. the stored match was `(neighbor, part)` rather
    /// than `(part, neighbor)`), so callers know how to orient the
    /// resulting [`SharedCutConnection`].
    reversed: bool,
}

fn adjacency(parts: &[&Part], tolerance: f64) -> BTreeMap<PartId, Vec<Neighbor>> {
    let index = build_match_index(parts, tolerance);
    let mut adjacency: BTreeMap<PartId, Vec<Neighbor>> = BTreeMap::new();
    for pm in &index {
        adjacency.entry(pm.part1_id).or_default().push(Neighbor {
            part_id: pm.part2_id,
            angle_match: pm.best_angle_match,
            reversed: false,
        });
        adjacency.entry(pm.part2_id).or_default().push(Neighbor {
            part_id: pm.part1_id,
            angle_match: pm.best_angle_match,
            reversed: true,
        });
    }
    for neighbors in adjacency.values_mut() {
        neighbors.sort_by(|a, b| {
            b.angle_match
                .savings
                .partial_cmp(&a.angle_match.savings)
                .unwrap()
                .then(a.part_id.cmp(&b.part_id))
        });
    }
    adjacency
}

fn connection_from(from: PartId, to: PartId, n: &Neighbor) -> SharedCutConnection {
    let (from_position, to_position) = if n.reversed {
        (n.angle_match.part2_position, n.angle_match.part1_position)
    } else {
        (n.angle_match.part1_position, n.angle_match.part2_position)
    };
    SharedCutConnection {
        from_part_id: from,
        to_part_id: to,
        from_position,
        to_position,
        shared_angle: n.angle_match.shared_angle,
        savings: n.angle_match.savings,
    }
}

fn best_candidate(
    end: PartId,
    consumed: &BTreeSet<PartId>,
    in_chain: &BTreeSet<PartId>,
    adjacency: &BTreeMap<PartId, Vec<Neighbor>>,
) -> Option<Neighbor> {
    adjacency
        .get(&end)?
        .iter()
        .find(|n| !consumed.contains(&n.part_id) && !in_chain.contains(&n.part_id))
        .copied()
}

fn is_mixed(part_ids: &[PartId], parts_by_id: &BTreeMap<PartId, &Part>) -> bool {
    let Some(&first) = part_ids.first() else {
        return false;
    };
    let reference = parts_by_id[&first];
    part_ids.iter().skip(1).any(|id| {
        let p = parts_by_id[id];
        p.length != reference.length
            || p.thickness != reference.thickness
            || p.angles != reference.angles
    })
}

/// Builds shared-cut chains over `parts`. Never fails: on no matches,
/// returns empty chains with every part as remaining.
pub fn build_chains(parts: &[Part], tolerance: f64, max_chain_length: u32) -> ChainBuildResult {
    let max_chain_length = max_chain_length.max(2) as usize;
    let parts_by_id: BTreeMap<PartId, &Part> = parts.iter().map(|p| (p.id, p)).collect();
    let usable: Vec<&Part> = parts.iter().filter(|p| p.has_usable_angles()).collect();

    let adjacency = adjacency(&usable, tolerance);
    let index = build_match_index(&usable, tolerance);

    let mut consumed: BTreeSet<PartId> = BTreeSet::new();
    let mut chains: Vec<SharedCutChain> = Vec::new();
    let mut next_chain_id: ChainId = 1;

    for seed in &index {
        if consumed.contains(&seed.part1_id) || consumed.contains(&seed.part2_id) {
            continue;
        }

        let mut part_ids = vec![seed.part1_id, seed.part2_id];
        let mut connections = vec![SharedCutConnection {
            from_part_id: seed.part1_id,
            to_part_id: seed.part2_id,
            from_position: seed.best_angle_match.part1_position,
            to_position: seed.best_angle_match.part2_position,
            shared_angle: seed.best_angle_match.shared_angle,
            savings: seed.best_angle_match.savings,
        }];
        let mut in_chain: BTreeSet<PartId> = [seed.part1_id, seed.part2_id].into_iter().collect();

        while part_ids.len() < max_chain_length {
            let head = *part_ids.first().unwrap();
            let tail = *part_ids.last().unwrap();

            let head_candidate = best_candidate(head, &consumed, &in_chain, &adjacency);
            let tail_candidate = best_candidate(tail, &consumed, &in_chain, &adjacency);

            let extend_head = match (head_candidate, tail_candidate) {
                (None, None) => break,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (Some(hc), Some(tc)) => {
                    let mut with_head = part_ids.clone();
                    with_head.insert(0, hc.part_id);
                    let mut with_tail = part_ids.clone();
                    with_tail.push(tc.part_id);

                    let head_makes_mixed = is_mixed(&with_head, &parts_by_id);
                    let tail_makes_mixed = is_mixed(&with_tail, &parts_by_id);

                    if head_makes_mixed != tail_makes_mixed {
                        head_makes_mixed
                    } else {
                        hc.angle_match.savings >= tc.angle_match.savings
                    }
                }
            };

            if extend_head {
                let hc = head_candidate.unwrap();
                let conn = connection_from(hc.part_id, head, &hc);
                part_ids.insert(0, hc.part_id);
                connections.insert(0, conn);
                in_chain.insert(hc.part_id);
            } else {
                let tc = tail_candidate.unwrap();
                let conn = connection_from(tail, tc.part_id, &tc);
                part_ids.push(tc.part_id);
                connections.push(conn);
                in_chain.insert(tc.part_id);
            }
        }

        for id in &part_ids {
            consumed.insert(*id);
        }

        let total_length: f64 = part_ids.iter().map(|id| parts_by_id[id].length).sum();
        let total_savings: f64 = connections.iter().map(|c| c.savings).sum();
        let is_mixed_chain = is_mixed(&part_ids, &parts_by_id);

        chains.push(SharedCutChain {
            id: next_chain_id,
            part_ids,
            connections,
            total_length,
            total_savings,
            is_mixed_chain,
        });
        next_chain_id += 1;
    }

    chains.sort_by(|a, b| {
        b.is_mixed_chain
            .cmp(&a.is_mixed_chain)
            .then(b.total_savings.partial_cmp(&a.total_savings).unwrap())
    });

    let remaining: Vec<PartId> = parts
        .iter()
        .map(|p| p.id)
        .filter(|id| !consumed.contains(id))
        .collect();
    let total_savings = chains.iter().map(|c| c.total_savings).sum();

    ChainBuildResult {
        chains,
        remaining,
        total_savings,
    }
}
