use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum AppPhase {
    #[default]
    Boot,
    InGame,
}

/// Mirrors the engine's tick scheduler so transitions can hook `OnEnter`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum LoopState {
    Running,
    #[default]
    Stopped,
}
