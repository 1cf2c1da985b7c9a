//! Errors that indicate a bug in the optimizer itself, not a user condition.

use thiserror::Error;

/// A `LogicFault` means an invariant the engine promises to maintain has
/// been violated after placement completed. Per the completeness guarantee
/// this should never occur on valid input; if it does, it is not
/// recoverable and the caller should treat it as a bug report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicFault {
    #[error("CRITICAL: placed {placed} parts but expected {expected} from valid input")]
    IncompletePlacement { placed: usize, expected: usize },

    #[error("CRITICAL: chain {chain_id} connections do not concatenate with its part order")]
    MalformedChain { chain_id: u64 },

    #[error("CRITICAL: bar {material_id}#{instance_index} used length {used} exceeds its length {length}")]
    BarOverflow {
        material_id: u64,
        instance_index: u32,
        used: f64,
        length: f64,
    },
}
