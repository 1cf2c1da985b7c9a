//! Pairwise match index (C3): every unordered pair of parts with at least
//! one compatible corner, sorted by best savings descending.

use crate::angle_matcher::{best_match, match_angles};
use crate::constants::EngineConstants;
use crate::models::angle_match::PartMatch;
use crate::models::part::Part;

/// Builds the sorted match index for `parts`. Parts without usable angles
/// are excluded entirely. Above
/// [`EngineConstants::MATCH_INDEX_PRUNE_THRESHOLD`] pairs, zero-savings
/// matches are pruned early to bound memory.
pub fn build_match_index(parts: &[&Part], tolerance: f64) -> Vec<PartMatch> {
    let candidates: Vec<&&Part> = parts.iter().filter(|p| p.has_usable_angles()).collect();
    let pair_count = candidates.len().saturating_mul(candidates.len().saturating_sub(1)) / 2;
    let prune_zero_savings = pair_count > EngineConstants::MATCH_INDEX_PRUNE_THRESHOLD;

    let mut index = Vec::new();
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let p1 = candidates[i];
            let p2 = candidates[j];
            let matches = match_angles(p1, p2, tolerance);
            if matches.is_empty() {
                continue;
            }
            let Some(best) = best_match(&matches) else {
                continue;
            };
            if prune_zero_savings && best.savings <= 0.0 {
                continue;
            }
            index.push(PartMatch {
                part1_id: p1.id,
                part2_id: p2.id,
                best_angle_match: best,
                all_matches: matches,
            });
        }
    }

    index.sort_by(|a, b| {
        b.best_angle_match
            .savings
            .partial_cmp(&a.best_angle_match.savings)
            .unwrap()
            .then(a.part1_id.cmp(&b.part1_id))
            .then(a.part2_id.cmp(&b.part2_id))
    });

    index
}
