use bevy::prelude::*;
use homestead_idle::{GameEngine, SeedData, load_seed_data_from_path};

use super::resources::{RuntimeConfig, SessionState};
use super::state::{AppPhase, LoopState};

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
    mut next_loop_state: ResMut<NextState<LoopState>>,
) {
    let seed = match config.seed_data_path.as_deref() {
        Some(path) => load_seed_data_from_path(path).or_else(|err| {
            warn!("falling back to bundled seed data: {err:#}");
            SeedData::bundled()
        }),
        None => SeedData::bundled(),
    };

    let seed = match seed {
        Ok(seed) => seed,
        Err(err) => {
            error!("cannot start a game session: {err:#}");
            return;
        }
    };

    commands.insert_resource(SessionState {
        engine: GameEngine::new(seed, config.engine.clone()),
        pending_frame: None,
    });

    next_phase.set(AppPhase::InGame);
    next_loop_state.set(LoopState::Running);
}
