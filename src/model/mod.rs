mod ids;
mod records;
mod upgrade;

pub use ids::{BuildingId, ResourceId, UpgradeId};
pub use records::{Building, LogMessage, Resource};
pub use upgrade::{Upgrade, UpgradeEffect};
