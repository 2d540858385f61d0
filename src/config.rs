use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_FPS_WINDOW, DEFAULT_MAX_LOG_ENTRIES};

/// Tunables for a [`GameEngine`](crate::core::GameEngine) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Must be at least 1. Configs built in code with 0 are clamped to 1.
    pub max_log_entries: usize,
    /// Must be at least 1. Configs built in code with 0 are clamped to 1.
    pub fps_window: usize,
    /// Amount a single manual click adds to a resource.
    pub click_amount: f64,
    /// Fixed seed for narration and log ids; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_log_entries: DEFAULT_MAX_LOG_ENTRIES,
            fps_window: DEFAULT_FPS_WINDOW,
            click_amount: 1.0,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_log_entries == 0 {
            bail!("max_log_entries must be at least 1");
        }
        if self.fps_window == 0 {
            bail!("fps_window must be at least 1");
        }
        Ok(())
    }
}
