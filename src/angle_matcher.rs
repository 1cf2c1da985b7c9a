//! Angle matcher (C2): enumerates position×position angle matches between
//! two parts and picks the best by savings.

use crate::geometry::{can_angles_match, shared_cut_savings};
use crate::models::angle_match::AngleMatch;
use crate::models::part::Part;

/// Enumerates every compatible corner pairing between `p1` and `p2`.
/// Position indices follow [`crate::models::part::PartAngles::by_position`]:
/// 0=topLeft, 1=topRight, 2=bottomLeft, 3=bottomRight.
pub fn match_angles(p1: &Part, p2: &Part, tolerance: f64) -> Vec<AngleMatch> {
    let a1 = p1.angles.by_position();
    let a2 = p2.angles.by_position();
    let mut matches = Vec::new();

    for (i, &angle1) in a1.iter().enumerate() {
        for (j, &angle2) in a2.iter().enumerate() {
            if can_angles_match(angle1, angle2, tolerance) {
                let shared_angle = angle1.min(angle2);
                let savings = shared_cut_savings(shared_angle, p1.thickness, p2.thickness);
                matches.push(AngleMatch {
                    part1_position: i,
                    part2_position: j,
                    shared_angle,
                    savings,
                });
            }
        }
    }

    matches
}

/// The match maximizing savings; ties broken by (smaller part1 position,
/// then smaller part2 position) for determinism.
pub fn best_match(matches: &[AngleMatch]) -> Option<AngleMatch> {
    matches
        .iter()
        .copied()
        .min_by(|a, b| {
            b.savings
                .partial_cmp(&a.savings)
                .unwrap()
                .then(a.part1_position.cmp(&b.part1_position))
                .then(a.part2_position.cmp(&b.part2_position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::PartAngles;

    fn part(id: u64, angles: PartAngles) -> Part {
        Part::new(id, 1500.0, 1, angles)
    }

    #[test]
    fn finds_match_within_tolerance() {
        let p1 = part(
            1,
            PartAngles {
                top_left: 45.0,
                ..PartAngles::square()
            },
        );
        let p2 = part(
            2,
            PartAngles {
                top_left: 45.0,
                ..PartAngles::square()
            },
        );
        let matches = match_angles(&p1, &p2, 10.0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].shared_angle, 45.0);
    }

    #[test]
    fn square_parts_never_match() {
        let p1 = part(1, PartAngles::square());
        let p2 = part(2, PartAngles::square());
        assert!(match_angles(&p1, &p2, 10.0).is_empty());
    }

    #[test]
    fn best_match_picks_higher_savings_then_lowest_position() {
        // Two angle options between the same pair of corners; the
        // higher-angle match wins since it yields more savings.
        let p1 = part(
            1,
            PartAngles {
                top_left: 30.0,
                top_right: 60.0,
                ..PartAngles::square()
            },
        );
        let p2 = part(
            2,
            PartAngles {
                top_left: 30.0,
                top_right: 60.0,
                ..PartAngles::square()
            },
        );
        let matches = match_angles(&p1, &p2, 10.0);
        let best = best_match(&matches).unwrap();
        assert_eq!(best.shared_angle, 60.0);
    }

    #[test]
    fn best_match_tie_break_is_deterministic() {
        let matches = vec![
            AngleMatch {
                part1_position: 1,
                part2_position: 0,
                shared_angle: 45.0,
                savings: 5.0,
            },
            AngleMatch {
                part1_position: 0,
                part2_position: 0,
                shared_angle: 45.0,
                savings: 5.0,
            },
        ];
        let best = best_match(&matches).unwrap();
        assert_eq!(best.part1_position, 0);
    }
}
