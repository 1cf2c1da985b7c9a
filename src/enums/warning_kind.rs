use serde::{Deserialize, Serialize};

/// Small taxonomy of soft-warning reasons, so formatters downstream of this
/// crate can attach advice without parsing free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A material bar ended up with very low utilization.
    LowUtilization,
    /// A bar's remaining space after placement is below any usable part length.
    Fragmentation,
    /// The material catalog was empty, so a default stock type was spawned.
    AutoProvisionedMaterial,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::LowUtilization => "LOW_UTILIZATION",
            Self::Fragmentation => "FRAGMENTATION",
            Self::AutoProvisionedMaterial => "AUTO_PROVISIONED_MATERIAL",
        };
        write!(f, "{}", text)
    }
}
