mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::{PlayerAction, RuntimeConfig};
use state::{AppPhase, LoopState};

pub struct HomesteadAppPlugin;

impl Plugin for HomesteadAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_state::<LoopState>()
            .insert_resource(RuntimeConfig::from_env())
            .add_event::<PlayerAction>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_hud)
            .add_systems(OnEnter(LoopState::Running), simulation::start_loop)
            .add_systems(OnEnter(LoopState::Stopped), simulation::stop_loop)
            .add_systems(
                Update,
                (
                    input::toggle_loop,
                    input::emit_player_actions,
                    simulation::apply_player_actions,
                    simulation::drive_frame.run_if(in_state(LoopState::Running)),
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            )
            .add_systems(Last, simulation::teardown_session);
    }
}
