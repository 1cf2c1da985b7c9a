use serde::{Deserialize, Serialize};

/// How many instances of a material type may be spawned.
///
/// The source this engine is modeled on encodes "unlimited" as
/// `quantity = 0` on a material record. We re-express that as an explicit
/// variant so provisioning code never has to special-case a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Supply {
    Finite(u32),
    Unlimited,
}

impl Supply {
    /// Whether one more instance may still be spawned given `already_spawned`.
    pub fn allows(&self, already_spawned: u32) -> bool {
        match self {
            Supply::Unlimited => true,
            Supply::Finite(n) => already_spawned < *n,
        }
    }
}

impl Default for Supply {
    fn default() -> Self {
        Supply::Unlimited
    }
}
