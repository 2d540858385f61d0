use bevy::prelude::*;
use homestead_idle::GameError;

use super::resources::{PlayerAction, SessionState};
use super::state::LoopState;

fn now_ms(time: &Time<Real>) -> f64 {
    time.elapsed_secs_f64() * 1000.0
}

pub fn apply_player_actions(
    mut actions: EventReader<PlayerAction>,
    mut session: ResMut<SessionState>,
) {
    for action in actions.read() {
        let result = match action {
            PlayerAction::Click(id) => session.engine.update_resource_click(id),
            PlayerAction::Build(id) => session.engine.add_building(id, 1),
            PlayerAction::Upgrade(id) => session.engine.apply_game_upgrade(id),
        };
        if let Err(err) = result {
            report_rejected_action(action, &err);
        }
    }
}

/// Unknown ids mean the HUD offered something the engine does not have.
fn report_rejected_action(action: &PlayerAction, err: &GameError) {
    debug_assert!(!err.is_not_found(), "{action:?} rejected: {err}");
    error!("{action:?} rejected: {err}");
}

pub fn start_loop(time: Res<Time<Real>>, session: Option<ResMut<SessionState>>) {
    let Some(mut session) = session else {
        return;
    };
    match session.engine.start(now_ms(&time)) {
        Ok(request) => session.pending_frame = Some(request),
        Err(err) => warn!("tick loop not started: {err}"),
    }
}

pub fn stop_loop(session: Option<ResMut<SessionState>>) {
    if let Some(mut session) = session {
        session.engine.stop();
        session.pending_frame = None;
    }
}

/// Runs the pending frame. Returns `false` once the loop has halted on a
/// failed tick; the engine scheduler is stopped by then.
pub fn advance_session(session: &mut SessionState, now_ms: f64) -> bool {
    let Some(request) = session.pending_frame.take() else {
        return true;
    };
    match session.engine.frame(request, now_ms) {
        Ok(next) => {
            session.pending_frame = next;
            true
        }
        Err(err) => {
            error!("tick failed, loop halted: {err}");
            session.engine.stop();
            false
        }
    }
}

pub fn drive_frame(
    time: Res<Time<Real>>,
    mut session: ResMut<SessionState>,
    mut next_loop_state: ResMut<NextState<LoopState>>,
) {
    if !advance_session(&mut session, now_ms(&time)) {
        next_loop_state.set(LoopState::Stopped);
    }
}

pub fn teardown_session(
    mut exits: EventReader<AppExit>,
    session: Option<ResMut<SessionState>>,
) {
    if exits.read().next().is_none() {
        return;
    }
    if let Some(mut session) = session {
        session.engine.teardown();
        session.pending_frame = None;
    }
}
