//! Best-score persistence
//!
//! The game only ever stores one integer: the best floored score. Stores
//! are named slots so several games (or profiles) can share one file.

mod file;

pub use file::JsonFileStore;

use crate::error::StoreError;

/// Slot name used by the game
pub const HIGH_SCORE_KEY: &str = "minimal_runner_high_score";

/// Somewhere to keep the best score between runs
pub trait ScoreStore {
    /// Read the stored best score; 0 when absent or unreadable
    fn load_best(&self) -> u64;

    /// Overwrite the stored best score
    fn save_best(&mut self, best: u64) -> Result<(), StoreError>;
}

/// Process-lifetime store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u64>,
    /// Number of successful saves
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u64) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> u64 {
        self.best.unwrap_or(0)
    }

    fn save_best(&mut self, best: u64) -> Result<(), StoreError> {
        self.best = Some(best);
        self.writes += 1;
        Ok(())
    }
}
