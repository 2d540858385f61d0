use serde::{Deserialize, Serialize};

use super::ids::{BuildingId, ResourceId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

impl Resource {
    pub fn new(id: impl Into<ResourceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub produces: ResourceId,
    /// Units of `produces` per second, per owned building.
    pub base_rate: f64,
    #[serde(default)]
    pub amount: u32,
}

impl Building {
    pub fn new(
        id: impl Into<BuildingId>,
        name: impl Into<String>,
        produces: impl Into<ResourceId>,
        base_rate: f64,
        amount: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            produces: produces.into(),
            base_rate,
            amount,
        }
    }

    pub fn rate_per_second(&self) -> f64 {
        self.amount as f64 * self.base_rate
    }

    pub fn production_for(&self, delta_ms: f64) -> f64 {
        self.rate_per_second() * delta_ms / 1000.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    pub id: String,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}
