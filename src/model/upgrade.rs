use serde::{Deserialize, Serialize};

use super::ids::{BuildingId, ResourceId, UpgradeId};

/// What an upgrade does when applied. Interpreted by
/// [`UpgradeCatalog::apply`](crate::core::UpgradeCatalog::apply).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UpgradeEffect {
    ScaleBuildingRate { building: BuildingId, factor: f64 },
    AddBuildings { building: BuildingId, amount: u32 },
    GrantResource { resource: ResourceId, amount: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: UpgradeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub effect: UpgradeEffect,
}
