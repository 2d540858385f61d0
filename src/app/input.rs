use bevy::prelude::*;
use homestead_idle::GameEngine;

use super::resources::{PlayerAction, SessionState};
use super::state::LoopState;

pub const CLICK_KEYS: [KeyCode; 4] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
];
pub const BUILD_KEYS: [KeyCode; 4] = [KeyCode::KeyQ, KeyCode::KeyW, KeyCode::KeyE, KeyCode::KeyR];
pub const UPGRADE_KEYS: [KeyCode; 4] = [KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD, KeyCode::KeyF];

pub fn key_label(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Digit1 => "1",
        KeyCode::Digit2 => "2",
        KeyCode::Digit3 => "3",
        KeyCode::Digit4 => "4",
        KeyCode::KeyQ => "Q",
        KeyCode::KeyW => "W",
        KeyCode::KeyE => "E",
        KeyCode::KeyR => "R",
        KeyCode::KeyA => "A",
        KeyCode::KeyS => "S",
        KeyCode::KeyD => "D",
        KeyCode::KeyF => "F",
        _ => "?",
    }
}

fn slot_of(keys: &[KeyCode], key: KeyCode) -> Option<usize> {
    keys.iter().position(|candidate| *candidate == key)
}

/// Maps a key to the action on the item listed in its slot, in HUD order.
/// Keys past the end of a list resolve to nothing.
pub fn action_for_key(key: KeyCode, engine: &GameEngine) -> Option<PlayerAction> {
    if let Some(slot) = slot_of(&CLICK_KEYS, key) {
        let id = engine.resource_store().get().keys().nth(slot)?;
        return Some(PlayerAction::Click(id.clone()));
    }
    if let Some(slot) = slot_of(&BUILD_KEYS, key) {
        let id = engine.building_store().get().keys().nth(slot)?;
        return Some(PlayerAction::Build(id.clone()));
    }
    let slot = slot_of(&UPGRADE_KEYS, key)?;
    let id = engine.upgrades().keys().nth(slot)?;
    Some(PlayerAction::Upgrade(id.clone()))
}

pub fn emit_player_actions(
    keys: Res<ButtonInput<KeyCode>>,
    session: Res<SessionState>,
    mut actions: EventWriter<PlayerAction>,
) {
    for key in keys.get_just_pressed() {
        if let Some(action) = action_for_key(*key, &session.engine) {
            actions.send(action);
        }
    }
}

pub fn toggle_loop(
    keys: Res<ButtonInput<KeyCode>>,
    loop_state: Res<State<LoopState>>,
    mut next_loop_state: ResMut<NextState<LoopState>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let next = match loop_state.get() {
        LoopState::Running => LoopState::Stopped,
        LoopState::Stopped => LoopState::Running,
    };
    next_loop_state.set(next);
}
