//! Geometry & angle primitives (C1).
//!
//! These are the only functions in the crate that touch trigonometry; every
//! other component calls into here rather than recomputing savings or
//! re-deriving the angle-compatibility rule.

use crate::errors::ValidationError;
use crate::models::part::PartAngles;

/// `0 <= a < 90`.
pub fn is_valid_bevel_angle(angle: f64) -> bool {
    angle.is_finite() && angle >= 0.0 && angle < 90.0
}

/// Two corners can share a cut iff both are non-zero bevels within
/// `tolerance` of one another. Zero angles (square corners) never match,
/// even against another zero.
pub fn can_angles_match(a1: f64, a2: f64, tolerance: f64) -> bool {
    a1 > 0.0 && a2 > 0.0 && (a1 - a2).abs() <= tolerance
}

/// `sin(angle * pi / 180) * min(t1, t2)`.
///
/// Zero at `angle = 0`, approaching `min(t1, t2)` as `angle` approaches 90°.
/// Pure function of its inputs: identical inputs always produce a
/// bit-identical result.
pub fn shared_cut_savings(angle: f64, t1: f64, t2: f64) -> f64 {
    (angle.to_radians()).sin() * t1.min(t2)
}

/// Validates the side-exclusion rule and angle ranges for a part's four
/// corners, collecting every violation rather than stopping at the first.
pub fn validate_part_angles(angles: &PartAngles) -> Result<(), Vec<ValidationError>> {
    let mut violations = Vec::new();

    for angle in [
        angles.top_left,
        angles.top_right,
        angles.bottom_left,
        angles.bottom_right,
    ] {
        if !is_valid_bevel_angle(angle) {
            violations.push(ValidationError::AngleOutOfRange { angle });
        }
    }

    if angles.top_left > 0.0 && angles.bottom_left > 0.0 {
        violations.push(ValidationError::LeftSideConflict {
            top_left: angles.top_left,
            bottom_left: angles.bottom_left,
        });
    }

    if angles.top_right > 0.0 && angles.bottom_right > 0.0 {
        violations.push(ValidationError::RightSideConflict {
            top_right: angles.top_right,
            bottom_right: angles.bottom_right,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// At least one corner is a usable (non-zero) bevel.
pub fn has_usable_angles(angles: &PartAngles) -> bool {
    angles.top_left > 0.0
        || angles.top_right > 0.0
        || angles.bottom_left > 0.0
        || angles.bottom_right > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angle_never_matches() {
        assert!(!can_angles_match(0.0, 0.0, 10.0));
        assert!(!can_angles_match(0.0, 45.0, 10.0));
        assert!(!can_angles_match(45.0, 0.0, 10.0));
    }

    #[test]
    fn can_angles_match_is_symmetric() {
        for (a, b, tol) in [(30.0, 35.0, 10.0), (10.0, 40.0, 5.0), (45.0, 45.0, 0.0)] {
            assert_eq!(can_angles_match(a, b, tol), can_angles_match(b, a, tol));
        }
    }

    #[test]
    fn savings_monotone_in_angle() {
        let mut prev = shared_cut_savings(0.0, 10.0, 10.0);
        for angle in (1..90).step_by(5) {
            let next = shared_cut_savings(angle as f64, 10.0, 10.0);
            assert!(next >= prev, "savings decreased at angle {angle}");
            prev = next;
        }
    }

    #[test]
    fn savings_deterministic() {
        let a = shared_cut_savings(45.0, 10.0, 12.0);
        let b = shared_cut_savings(45.0, 10.0, 12.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn savings_zero_at_zero_angle() {
        assert_eq!(shared_cut_savings(0.0, 10.0, 10.0), 0.0);
    }

    #[test]
    fn savings_uses_thinner_part() {
        let s = shared_cut_savings(90.0, 5.0, 20.0);
        assert!((s - 5.0).abs() < 1e-9);
    }

    #[test]
    fn validate_collects_all_violations() {
        let angles = PartAngles {
            top_left: 45.0,
            bottom_left: 30.0,
            top_right: 100.0,
            bottom_right: 0.0,
        };
        let errs = validate_part_angles(&angles).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert!(errs
            .iter()
            .any(|e| matches!(e, ValidationError::LeftSideConflict { .. })));
        assert!(errs
            .iter()
            .any(|e| matches!(e, ValidationError::AngleOutOfRange { .. })));
    }

    #[test]
    fn validate_is_idempotent() {
        let angles = PartAngles {
            top_left: 45.0,
            bottom_left: 30.0,
            top_right: 0.0,
            bottom_right: 0.0,
        };
        assert_eq!(validate_part_angles(&angles), validate_part_angles(&angles));
    }
}
