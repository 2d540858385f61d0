use std::collections::{BTreeMap, HashMap};

use crate::error::{GameError, GameResult};
use crate::model::{Building, BuildingId, Resource, ResourceId, Upgrade, UpgradeEffect, UpgradeId};

use super::building_store::BuildingStore;
use super::resource_store::ResourceStore;

/// Mutation view handed to upgrade effects. Built fresh for every application
/// and dropped right after, so it never outlives the borrow of the stores.
pub struct GameState<'a> {
    resources: &'a mut ResourceStore,
    buildings: &'a mut BuildingStore,
}

impl<'a> GameState<'a> {
    pub fn new(resources: &'a mut ResourceStore, buildings: &'a mut BuildingStore) -> Self {
        Self {
            resources,
            buildings,
        }
    }

    pub fn resources(&self) -> &BTreeMap<ResourceId, Resource> {
        self.resources.get()
    }

    pub fn buildings(&self) -> &BTreeMap<BuildingId, Building> {
        self.buildings.get()
    }

    pub fn update_building(&mut self, id: &BuildingId, building: Building) -> GameResult<()> {
        self.buildings.update_building(id, building)
    }

    pub fn add_building(&mut self, id: &BuildingId, amount: u32) -> GameResult<()> {
        self.buildings.add_building(id, amount)
    }

    pub fn update_resource(&mut self, id: &ResourceId, amount: f64) -> GameResult<()> {
        self.resources.update(id, amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpgradeCatalog {
    upgrades: BTreeMap<UpgradeId, Upgrade>,
    applied: HashMap<UpgradeId, u32>,
}

impl UpgradeCatalog {
    pub fn new(upgrades: impl IntoIterator<Item = Upgrade>) -> Self {
        Self {
            upgrades: upgrades
                .into_iter()
                .map(|upgrade| (upgrade.id.clone(), upgrade))
                .collect(),
            applied: HashMap::new(),
        }
    }

    pub fn get(&self) -> &BTreeMap<UpgradeId, Upgrade> {
        &self.upgrades
    }

    pub fn upgrade(&self, id: &UpgradeId) -> GameResult<&Upgrade> {
        self.upgrades
            .get(id)
            .ok_or_else(|| GameError::UpgradeNotFound { id: id.clone() })
    }

    /// How many times `id` has been applied this session.
    pub fn times_applied(&self, id: &UpgradeId) -> u32 {
        self.applied.get(id).copied().unwrap_or(0)
    }

    /// Runs the upgrade's effect against `state`. Effects mutate through the
    /// view only. Upgrades stack: applying twice applies the effect twice.
    pub fn apply(&mut self, id: &UpgradeId, state: &mut GameState<'_>) -> GameResult<()> {
        let upgrade = self.upgrade(id)?;
        apply_effect(&upgrade.effect, state)?;
        *self.applied.entry(id.clone()).or_insert(0) += 1;
        Ok(())
    }
}

fn apply_effect(effect: &UpgradeEffect, state: &mut GameState<'_>) -> GameResult<()> {
    match effect {
        UpgradeEffect::ScaleBuildingRate { building, factor } => {
            let current = state
                .buildings()
                .get(building)
                .ok_or_else(|| GameError::BuildingNotFound {
                    id: building.clone(),
                })?;
            let scaled = Building {
                base_rate: current.base_rate * factor,
                ..current.clone()
            };
            state.update_building(building, scaled)
        }
        UpgradeEffect::AddBuildings { building, amount } => state.add_building(building, *amount),
        UpgradeEffect::GrantResource { resource, amount } => {
            state.update_resource(resource, *amount)
        }
    }
}
