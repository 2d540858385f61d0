use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::LogMessage;

pub const DEFAULT_MAX_LOG_ENTRIES: usize = 100;

const UPGRADE_TEMPLATES: [&str; 3] = [
    "You're becoming a tycoon with the {name}!",
    "Don't get too power-hungry now that you have {name}.",
    "Ah, the {name}. A fine choice, indeed!",
];

/// Bounded narration log. Oldest entries are evicted first.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLog {
    entries: VecDeque<LogMessage>,
    capacity: usize,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_LOG_ENTRIES)
    }
}

impl GameLog {
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> Vec<LogMessage> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&LogMessage> {
        self.entries.back()
    }

    pub fn append(
        &mut self,
        message: impl Into<String>,
        timestamp: u64,
        disambiguator: u64,
    ) -> &LogMessage {
        self.entries.push_back(LogMessage {
            id: format!("{timestamp}-{disambiguator}"),
            message: message.into(),
            timestamp,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        // push_back above guarantees at least one entry.
        &self.entries[self.entries.len() - 1]
    }
}

/// Picks one of the upgrade narration lines at random.
pub fn upgrade_narration<R: Rng + ?Sized>(upgrade_name: &str, rng: &mut R) -> String {
    let template = UPGRADE_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(UPGRADE_TEMPLATES[0]);
    template.replace("{name}", upgrade_name)
}
