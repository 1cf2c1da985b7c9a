/// Default values for [`crate::models::settings::CuttingSettings`].
pub struct SettingsDefaults;

impl SettingsDefaults {
    /// Reserved length at the start of every bar before the first part.
    pub const FRONT_CUTTING_LOSS: f64 = 10.0;
    /// Kerf gap between adjacent parts.
    pub const CUTTING_LOSS: f64 = 3.0;
    /// Maximum `|Δangle|` for a shared cut.
    pub const ANGLE_TOLERANCE: f64 = 10.0;
    /// Cap on parts per chain.
    pub const MAX_CHAIN_LENGTH: u32 = 50;
}

/// Constants governing auto-provisioning of a default material type when
/// the catalog is empty, and memory-safety caps on the pairwise match index.
pub struct EngineConstants;

impl EngineConstants {
    /// Floor length for an auto-generated stock bar (mm).
    pub const AUTO_MATERIAL_MIN_LENGTH: f64 = 6000.0;

    /// Number of initial bar instances seeded per material type before the
    /// placer starts provisioning on demand.
    pub const INITIAL_BARS_PER_MATERIAL: u32 = 1;

    /// Part-count threshold above which zero-savings matches are pruned
    /// early from the pairwise match index to bound memory to O(parts).
    pub const MATCH_INDEX_PRUNE_THRESHOLD: usize = 10_000;

    /// Bars whose utilization falls below this fraction get a
    /// `LowUtilization` warning in the aggregated result.
    pub const LOW_UTILIZATION_THRESHOLD: f64 = 0.5;
}

/// Default part thickness when unspecified (mm).
pub const DEFAULT_THICKNESS: f64 = 10.0;
