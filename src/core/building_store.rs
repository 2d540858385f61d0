use std::collections::BTreeMap;

use crate::error::{GameError, GameResult};
use crate::model::{Building, BuildingId, ResourceId};

use super::resource_store::ResourceStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingStore {
    buildings: BTreeMap<BuildingId, Building>,
}

impl BuildingStore {
    pub fn new(buildings: impl IntoIterator<Item = Building>) -> Self {
        Self {
            buildings: buildings
                .into_iter()
                .map(|building| (building.id.clone(), building))
                .collect(),
        }
    }

    pub fn get(&self) -> &BTreeMap<BuildingId, Building> {
        &self.buildings
    }

    pub fn snapshot(&self) -> Vec<Building> {
        self.buildings.values().cloned().collect()
    }

    pub fn contains(&self, id: &BuildingId) -> bool {
        self.buildings.contains_key(id)
    }

    pub fn building(&self, id: &BuildingId) -> GameResult<&Building> {
        self.buildings.get(id).ok_or_else(|| not_found(id))
    }

    pub fn add_building(&mut self, id: &BuildingId, amount: u32) -> GameResult<()> {
        let building = self.buildings.get_mut(id).ok_or_else(|| not_found(id))?;
        building.amount = building.amount.saturating_add(amount);
        Ok(())
    }

    /// Replaces the whole record stored under `id`.
    pub fn update_building(&mut self, id: &BuildingId, mut building: Building) -> GameResult<()> {
        let slot = self.buildings.get_mut(id).ok_or_else(|| not_found(id))?;
        building.id = id.clone();
        *slot = building;
        Ok(())
    }

    /// Credits every building's output for `delta_ms` of elapsed time.
    ///
    /// All produced resources are checked before anything is credited, so an
    /// unknown `produces` id leaves `resources` untouched.
    pub fn generate_resources(
        &self,
        delta_ms: f64,
        resources: &mut ResourceStore,
    ) -> GameResult<()> {
        if let Some(orphan) = self
            .buildings
            .values()
            .find(|building| !resources.contains(&building.produces))
        {
            return Err(GameError::ResourceNotFound {
                id: orphan.produces.clone(),
            });
        }

        for building in self.buildings.values() {
            resources.update(&building.produces, building.production_for(delta_ms))?;
        }
        Ok(())
    }

    /// Passive output per second, summed per resource.
    pub fn production_per_second(&self) -> BTreeMap<ResourceId, f64> {
        let mut rates = BTreeMap::new();
        for building in self.buildings.values() {
            *rates.entry(building.produces.clone()).or_insert(0.0) += building.rate_per_second();
        }
        rates
    }
}

fn not_found(id: &BuildingId) -> GameError {
    GameError::BuildingNotFound { id: id.clone() }
}

#[cfg(test)]
mod tests {
    use super::BuildingStore;
    use crate::core::ResourceStore;
    use crate::error::GameError;
    use crate::model::{Building, Resource, ResourceId};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn resources() -> ResourceStore {
        ResourceStore::new([Resource::new("food", "Food"), Resource::new("stone", "Stone")])
    }

    fn buildings() -> BuildingStore {
        BuildingStore::new([
            Building::new("farm", "Farm", "food", 1.0, 1),
            Building::new("quarry", "Quarry", "stone", 1.0, 1),
        ])
    }

    #[test]
    fn production_scales_with_amount_rate_and_time() {
        let mut store = buildings();
        store.add_building(&"farm".into(), 2).expect("farm exists");
        let mut resources = resources();

        store
            .generate_resources(250.0, &mut resources)
            .expect("all produced resources exist");

        assert_close(resources.value(&"food".into()).unwrap(), 3.0 * 0.25);
        assert_close(resources.value(&"stone".into()).unwrap(), 0.25);
    }

    #[test]
    fn buildings_sharing_a_resource_add_up() {
        let store = BuildingStore::new([
            Building::new("farm", "Farm", "food", 1.5, 2),
            Building::new("orchard", "Orchard", "food", 0.5, 4),
        ]);
        let mut resources = resources();

        store
            .generate_resources(1000.0, &mut resources)
            .expect("food exists");

        assert_close(resources.value(&"food".into()).unwrap(), 3.0 + 2.0);
        let rates = store.production_per_second();
        assert_close(rates[&ResourceId::from("food")], 5.0);
    }

    #[test]
    fn update_building_overwrites_record_but_keeps_key() {
        let mut store = buildings();
        let farm = store.building(&"farm".into()).unwrap().clone();

        store
            .update_building(
                &"farm".into(),
                Building {
                    id: "ignored".into(),
                    base_rate: 4.0,
                    ..farm
                },
            )
            .expect("farm exists");

        let farm = store.building(&"farm".into()).unwrap();
        assert_eq!(farm.id.as_str(), "farm");
        assert_close(farm.base_rate, 4.0);
        assert_eq!(farm.amount, 1);
    }

    #[test]
    fn unknown_building_is_rejected_without_mutation() {
        let mut store = buildings();
        let before = store.clone();

        assert_eq!(
            store.add_building(&"mill".into(), 1),
            Err(GameError::BuildingNotFound { id: "mill".into() })
        );
        assert_eq!(store, before);
    }

    #[test]
    fn orphan_producer_fails_whole_step() {
        let store = BuildingStore::new([
            Building::new("farm", "Farm", "food", 1.0, 1),
            Building::new("mine", "Mine", "gold", 1.0, 1),
        ]);
        let mut resources = resources();
        let before = resources.clone();

        let err = store
            .generate_resources(1000.0, &mut resources)
            .expect_err("gold is not a resource");

        assert_eq!(err, GameError::ResourceNotFound { id: "gold".into() });
        assert_eq!(resources, before);
    }
}
