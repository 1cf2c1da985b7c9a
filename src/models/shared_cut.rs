//! Shared-cut chains (C4 output): linear sequences of parts where every
//! adjacent pair shares a bevel cut.

use serde::{Deserialize, Serialize};

use crate::models::part::PartId;

pub type ChainId = u64;

/// A single shared cut between two adjacent parts in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedCutConnection {
    pub from_part_id: PartId,
    pub to_part_id: PartId,
    pub from_position: usize,
    pub to_position: usize,
    pub shared_angle: f64,
    pub savings: f64,
}

/// An ordered sequence of parts where every adjacent pair shares a cut.
///
/// Invariant: `connections.len() == part_ids.len() - 1` and
/// `connections[i].to_part_id == part_ids[i + 1]` /
/// `connections[i].from_part_id == part_ids[i]` for every `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedCutChain {
    pub id: ChainId,
    pub part_ids: Vec<PartId>,
    pub connections: Vec<SharedCutConnection>,
    pub total_length: f64,
    pub total_savings: f64,
    pub is_mixed_chain: bool,
}

impl SharedCutChain {
    pub fn len(&self) -> usize {
        self.part_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.part_ids.is_empty()
    }

    /// Checks the chain-order invariant: consecutive connections concatenate.
    pub fn is_well_formed(&self) -> bool {
        if self.connections.len() + 1 != self.part_ids.len() {
            return false;
        }
        for (i, conn) in self.connections.iter().enumerate() {
            if conn.from_part_id != self.part_ids[i] || conn.to_part_id != self.part_ids[i + 1] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(part_ids: Vec<PartId>, connections: Vec<SharedCutConnection>) -> SharedCutChain {
        SharedCutChain {
            id: 1,
            part_ids,
            connections,
            total_length: 0.0,
            total_savings: 0.0,
            is_mixed_chain: false,
        }
    }

    #[test]
    fn well_formed_chain_passes() {
        let c = chain(
            vec![1, 2, 3],
            vec![
                SharedCutConnection {
                    from_part_id: 1,
                    to_part_id: 2,
                    from_position: 0,
                    to_position: 0,
                    shared_angle: 45.0,
                    savings: 1.0,
                },
                SharedCutConnection {
                    from_part_id: 2,
                    to_part_id: 3,
                    from_position: 1,
                    to_position: 0,
                    shared_angle: 45.0,
                    savings: 1.0,
                },
            ],
        );
        assert!(c.is_well_formed());
    }

    #[test]
    fn broken_chain_order_fails() {
        let c = chain(
            vec![1, 2, 3],
            vec![
                SharedCutConnection {
                    from_part_id: 1,
                    to_part_id: 3, // wrong: should be 2
                    from_position: 0,
                    to_position: 0,
                    shared_angle: 45.0,
                    savings: 1.0,
                },
                SharedCutConnection {
                    from_part_id: 2,
                    to_part_id: 3,
                    from_position: 1,
                    to_position: 0,
                    shared_angle: 45.0,
                    savings: 1.0,
                },
            ],
        );
        assert!(!c.is_well_formed());
    }
}
