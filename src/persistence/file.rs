//! JSON file of named integer slots, e.g. `{"minimal_runner_high_score": 112}`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{HIGH_SCORE_KEY, ScoreStore};
use crate::error::StoreError;

/// Best score kept in one slot of a JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    /// Store using the game's default slot name
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, HIGH_SCORE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        let json = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&self) -> u64 {
        if !self.path.exists() {
            log::info!("No best score at {}, starting fresh", self.path.display());
            return 0;
        }
        let slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(e) => {
                log::warn!("Unreadable best score file {}: {e}", self.path.display());
                return 0;
            }
        };
        match slots.get(&self.key).and_then(Value::as_u64) {
            Some(best) => {
                log::info!("Loaded best score {best}");
                best
            }
            None => {
                log::warn!("Best score slot '{}' missing or invalid", self.key);
                0
            }
        }
    }

    fn save_best(&mut self, best: u64) -> Result<(), StoreError> {
        // Keep any other slots sharing the file
        let mut slots = if self.path.exists() {
            match self.read_slots() {
                Ok(slots) => slots,
                Err(e) => {
                    log::warn!(
                        "Replacing unreadable best score file {}: {e}",
                        self.path.display()
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        slots.insert(self.key.clone(), Value::from(best));

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&slots)?)?;
        log::info!("Best score {best} saved to {}", self.path.display());
        Ok(())
    }
}
