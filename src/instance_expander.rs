//! Part/instance expander (C5): expands quantities into individually
//! tracked instances.

use crate::models::part::{Part, PartInstance};

/// Expands `parts` into `PartInstance`s, one per unit of quantity.
/// Quantity-0 parts are skipped silently. Produces exactly
/// `sum(part.quantity)` instances, in input order.
pub fn expand_instances(parts: &[Part]) -> Vec<PartInstance> {
    let mut instances = Vec::new();
    for part in parts {
        for instance_index in 0..part.quantity {
            instances.push(PartInstance {
                part_id: part.id,
                instance_index,
                length: part.length,
                angles: part.angles,
                thickness: part.thickness,
            });
        }
    }
    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::part::PartAngles;

    #[test]
    fn expands_exactly_sum_of_quantities() {
        let parts = vec![
            Part::new(1, 1000.0, 3, PartAngles::square()),
            Part::new(2, 500.0, 2, PartAngles::square()),
        ];
        let instances = expand_instances(&parts);
        assert_eq!(instances.len(), 5);
    }

    #[test]
    fn zero_quantity_skipped() {
        let parts = vec![Part::new(1, 1000.0, 0, PartAngles::square())];
        assert!(expand_instances(&parts).is_empty());
    }

    #[test]
    fn instance_indices_are_zero_based_and_contiguous() {
        let parts = vec![Part::new(1, 1000.0, 3, PartAngles::square())];
        let instances = expand_instances(&parts);
        let indices: Vec<u32> = instances.iter().map(|i| i.instance_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
