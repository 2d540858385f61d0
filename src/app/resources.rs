use std::path::PathBuf;

use bevy::prelude::*;
use homestead_idle::{
    BuildingId, EngineConfig, FrameRequest, GameEngine, ResourceId, UpgradeId,
    load_engine_config_from_path,
};

const CONFIG_PATH_ENV: &str = "HOMESTEAD_CONFIG";
const SEED_PATH_ENV: &str = "HOMESTEAD_SEED";

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Seed data to load instead of the bundled set.
    pub seed_data_path: Option<PathBuf>,
    pub visible_log_lines: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            seed_data_path: None,
            visible_log_lines: 8,
        }
    }
}

impl RuntimeConfig {
    /// Reads `HOMESTEAD_CONFIG` (engine config JSON) and `HOMESTEAD_SEED`
    /// (seed data JSON). A config file that fails to load falls back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
            match load_engine_config_from_path(&path) {
                Ok(engine) => config.engine = engine,
                Err(err) => warn!("using default engine config: {err:#}"),
            }
        }
        config.seed_data_path = std::env::var_os(SEED_PATH_ENV).map(PathBuf::from);

        config
    }
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub engine: GameEngine,
    pub pending_frame: Option<FrameRequest>,
}

#[derive(Event, Debug, Clone)]
pub enum PlayerAction {
    Click(ResourceId),
    Build(BuildingId),
    Upgrade(UpgradeId),
}

#[derive(Component)]
pub struct HudText;
