pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod model;

pub use config::EngineConfig;
pub use crate::core::{
    BuildingStore, Clock, FixedClock, FpsWindow, Frame, FrameRequest, GameEngine, GameLog,
    GameState, ResourceStore, SchedulerState, SystemClock, TickScheduler, UpgradeCatalog,
};
pub use data::{SeedData, load_engine_config_from_path, load_seed_data_from_path, seed_data_path};
pub use error::{GameError, GameResult};
pub use model::{
    Building, BuildingId, LogMessage, Resource, ResourceId, Upgrade, UpgradeEffect, UpgradeId,
};
