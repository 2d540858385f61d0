use std::collections::BTreeMap;

use crate::error::{GameError, GameResult};
use crate::model::{Resource, ResourceId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceStore {
    resources: BTreeMap<ResourceId, Resource>,
}

impl ResourceStore {
    pub fn new(resources: impl IntoIterator<Item = Resource>) -> Self {
        Self {
            resources: resources
                .into_iter()
                .map(|resource| (resource.id.clone(), resource))
                .collect(),
        }
    }

    pub fn get(&self) -> &BTreeMap<ResourceId, Resource> {
        &self.resources
    }

    pub fn snapshot(&self) -> Vec<Resource> {
        self.resources.values().cloned().collect()
    }

    pub fn contains(&self, id: &ResourceId) -> bool {
        self.resources.contains_key(id)
    }

    pub fn resource(&self, id: &ResourceId) -> GameResult<&Resource> {
        self.resources
            .get(id)
            .ok_or_else(|| GameError::ResourceNotFound { id: id.clone() })
    }

    pub fn value(&self, id: &ResourceId) -> GameResult<f64> {
        self.resource(id).map(|resource| resource.value)
    }

    /// Adds `amount` to the resource. Unknown ids are rejected without mutation.
    pub fn update(&mut self, id: &ResourceId, amount: f64) -> GameResult<()> {
        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| GameError::ResourceNotFound { id: id.clone() })?;
        resource.value += amount;
        Ok(())
    }
}
