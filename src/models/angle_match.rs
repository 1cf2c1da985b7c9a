//! Output of the angle matcher (C2) and pairwise match index (C3).

use serde::{Deserialize, Serialize};

use crate::models::part::PartId;

/// One compatible corner pairing between two parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleMatch {
    pub part1_position: usize,
    pub part2_position: usize,
    pub shared_angle: f64,
    pub savings: f64,
}

/// All compatible corner pairings between a specific pair of parts, plus
/// the best one by savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMatch {
    pub part1_id: PartId,
    pub part2_id: PartId,
    pub best_angle_match: AngleMatch,
    pub all_matches: Vec<AngleMatch>,
}
