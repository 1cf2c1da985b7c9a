pub mod angle_match;
pub mod catalog;
pub mod material;
pub mod part;
pub mod placement;
pub mod result;
pub mod settings;
pub mod shared_cut;

pub use angle_match::{AngleMatch, PartMatch};
pub use catalog::{MaterialCatalog, PartCatalog};
pub use material::{BarState, Material, MaterialId, MaterialInstance};
pub use part::{InvalidPart, Part, PartAngles, PartId, PartInstance};
pub use placement::{PlacedPart, SharedCutInfo};
pub use result::{CuttingResult, MaterialUsagePlan, ResultSummary, Warning};
pub use settings::{CuttingSettings, CuttingSettingsBuilder};
pub use shared_cut::{ChainId, SharedCutChain, SharedCutConnection};
