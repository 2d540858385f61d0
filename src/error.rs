use crate::model::{BuildingId, ResourceId, UpgradeId};

/// Errors returned by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("resource '{id}' not found")]
    ResourceNotFound { id: ResourceId },

    #[error("building '{id}' not found")]
    BuildingNotFound { id: BuildingId },

    #[error("upgrade '{id}' not found")]
    UpgradeNotFound { id: UpgradeId },

    /// The session was torn down; no further mutation is accepted.
    #[error("game session has ended")]
    SessionEnded,
}

impl GameError {
    /// True for the unknown-id family. These indicate a caller bug.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. }
                | Self::BuildingNotFound { .. }
                | Self::UpgradeNotFound { .. }
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;
