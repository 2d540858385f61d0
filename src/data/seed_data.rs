use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::{Building, Resource, Upgrade, UpgradeEffect};

/// Starting resources, buildings and upgrade catalog for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub upgrades: Vec<Upgrade>,
}

impl SeedData {
    /// Checks that ids are unique and every reference resolves.
    pub fn validate(&self) -> Result<()> {
        let mut resource_ids = HashSet::new();
        for resource in &self.resources {
            if !resource_ids.insert(&resource.id) {
                bail!("duplicate resource id '{}'", resource.id);
            }
        }

        let mut building_ids = HashSet::new();
        for building in &self.buildings {
            if !building_ids.insert(&building.id) {
                bail!("duplicate building id '{}'", building.id);
            }
            if !resource_ids.contains(&building.produces) {
                bail!(
                    "building '{}' produces unknown resource '{}'",
                    building.id,
                    building.produces
                );
            }
        }

        let mut upgrade_ids = HashSet::new();
        for upgrade in &self.upgrades {
            if !upgrade_ids.insert(&upgrade.id) {
                bail!("duplicate upgrade id '{}'", upgrade.id);
            }
            match &upgrade.effect {
                UpgradeEffect::ScaleBuildingRate { building, .. }
                | UpgradeEffect::AddBuildings { building, .. } => {
                    if !building_ids.contains(building) {
                        bail!(
                            "upgrade '{}' targets unknown building '{building}'",
                            upgrade.id
                        );
                    }
                }
                UpgradeEffect::GrantResource { resource, .. } => {
                    if !resource_ids.contains(resource) {
                        bail!(
                            "upgrade '{}' targets unknown resource '{resource}'",
                            upgrade.id
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
