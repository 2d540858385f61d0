mod building_store;
mod clock;
mod engine;
mod game_log;
mod resource_store;
mod scheduler;
mod upgrade_catalog;

pub use building_store::BuildingStore;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::GameEngine;
pub use game_log::{DEFAULT_MAX_LOG_ENTRIES, GameLog, upgrade_narration};
pub use resource_store::ResourceStore;
pub use scheduler::{
    DEFAULT_FPS_WINDOW, FpsWindow, Frame, FrameRequest, SchedulerState, TickScheduler,
};
pub use upgrade_catalog::{GameState, UpgradeCatalog};
