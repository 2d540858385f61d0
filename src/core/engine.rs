use std::collections::BTreeMap;

use bevy::log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EngineConfig;
use crate::data::SeedData;
use crate::error::{GameError, GameResult};
use crate::model::{Building, BuildingId, LogMessage, Resource, ResourceId, Upgrade, UpgradeId};

use super::building_store::BuildingStore;
use super::clock::{Clock, SystemClock};
use super::game_log::{GameLog, upgrade_narration};
use super::resource_store::ResourceStore;
use super::scheduler::{FrameRequest, SchedulerState, TickScheduler};
use super::upgrade_catalog::{GameState, UpgradeCatalog};

/// One play session: every store, the log and the tick loop behind a single
/// API. Actions either succeed completely or leave the state untouched.
#[derive(Debug)]
pub struct GameEngine {
    resources: ResourceStore,
    buildings: BuildingStore,
    upgrades: UpgradeCatalog,
    log: GameLog,
    scheduler: TickScheduler,
    rng: StdRng,
    clock: Box<dyn Clock>,
    click_amount: f64,
    tick_index: u64,
    active: bool,
}

impl GameEngine {
    pub fn new(seed: SeedData, config: EngineConfig) -> Self {
        Self::with_clock(seed, config, SystemClock)
    }

    pub fn with_clock(seed: SeedData, config: EngineConfig, clock: impl Clock + 'static) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            "game session created: {} resources, {} buildings, {} upgrades",
            seed.resources.len(),
            seed.buildings.len(),
            seed.upgrades.len()
        );

        Self {
            resources: ResourceStore::new(seed.resources),
            buildings: BuildingStore::new(seed.buildings),
            upgrades: UpgradeCatalog::new(seed.upgrades),
            log: GameLog::with_capacity(config.max_log_entries),
            scheduler: TickScheduler::new(config.fps_window),
            rng,
            clock: Box::new(clock),
            click_amount: config.click_amount,
            tick_index: 0,
            active: true,
        }
    }

    pub fn resources(&self) -> Vec<Resource> {
        self.resources.snapshot()
    }

    pub fn buildings(&self) -> Vec<Building> {
        self.buildings.snapshot()
    }

    pub fn upgrades(&self) -> &BTreeMap<UpgradeId, Upgrade> {
        self.upgrades.get()
    }

    pub fn log_messages(&self) -> Vec<LogMessage> {
        self.log.entries()
    }

    pub fn fps(&self) -> String {
        self.scheduler.fps()
    }

    pub fn resource_store(&self) -> &ResourceStore {
        &self.resources
    }

    pub fn building_store(&self) -> &BuildingStore {
        &self.buildings
    }

    pub fn upgrade_catalog(&self) -> &UpgradeCatalog {
        &self.upgrades
    }

    pub fn production_per_second(&self) -> BTreeMap<ResourceId, f64> {
        self.buildings.production_per_second()
    }

    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn tick_index(&self) -> u64 {
        self.tick_index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn update_resource_click(&mut self, id: &ResourceId) -> GameResult<()> {
        self.ensure_active()?;
        self.resources.update(id, self.click_amount)
    }

    pub fn add_building(&mut self, id: &BuildingId, amount: u32) -> GameResult<()> {
        self.ensure_active()?;
        self.buildings.add_building(id, amount)
    }

    /// Applies the upgrade's effect and narrates the purchase.
    pub fn apply_game_upgrade(&mut self, id: &UpgradeId) -> GameResult<()> {
        self.ensure_active()?;
        let name = self.upgrades.upgrade(id)?.name.clone();

        let mut state = GameState::new(&mut self.resources, &mut self.buildings);
        self.upgrades.apply(id, &mut state)?;

        let message = upgrade_narration(&name, &mut self.rng);
        let disambiguator = self.rng.r#gen::<u32>() as u64;
        self.log.append(message, self.clock.now_millis(), disambiguator);
        info!(
            "upgrade '{id}' applied ({} time(s))",
            self.upgrades.times_applied(id)
        );
        Ok(())
    }

    /// Advances simulation time by `delta_ms`.
    pub fn do_tick(&mut self, delta_ms: f64) -> GameResult<()> {
        self.ensure_active()?;
        self.buildings.generate_resources(delta_ms, &mut self.resources)?;
        self.tick_index += 1;
        Ok(())
    }

    pub fn start(&mut self, now_ms: f64) -> GameResult<FrameRequest> {
        self.ensure_active()?;
        Ok(self.scheduler.start(now_ms))
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Handles one display frame. Returns the request for the next frame, or
    /// `None` when the loop is stopped or `request` was cancelled.
    pub fn frame(
        &mut self,
        request: FrameRequest,
        now_ms: f64,
    ) -> GameResult<Option<FrameRequest>> {
        if !self.active {
            return Ok(None);
        }
        let Some(frame) = self.scheduler.frame(request, now_ms) else {
            return Ok(None);
        };
        self.do_tick(frame.delta_ms)?;
        Ok(Some(frame.next))
    }

    /// Ends the session: stops the loop and rejects every later action.
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.scheduler.stop();
        self.active = false;
        info!("game session ended after {} ticks", self.tick_index);
    }

    fn ensure_active(&self) -> GameResult<()> {
        if self.active {
            Ok(())
        } else {
            warn!("rejected action on ended game session");
            Err(GameError::SessionEnded)
        }
    }
}
