//! Best-score stores

use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistError, ScoreEnvelope};

/// Somewhere the best score can be read from and written back to
pub trait ScoreStore {
    /// Stored best score (0 when nothing has been saved yet)
    fn load_best(&self) -> Result<u64, PersistError>;
    fn save_best(&mut self, score: u64) -> Result<(), PersistError>;
}

/// JSON file store with atomic replace
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&self) -> Result<u64, PersistError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let json = fs::read_to_string(&self.path)?;
        let envelope = ScoreEnvelope::from_json(&json)?;
        log::info!("Loaded best score {}", envelope.best_score);
        Ok(envelope.best_score)
    }

    fn save_best(&mut self, score: u64) -> Result<(), PersistError> {
        let json = ScoreEnvelope::new(score).to_json()?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Best score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: u64,
    pub writes: u32,
}

impl MemoryStore {
    pub fn new(best: u64) -> Self {
        Self { best, writes: 0 }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> Result<u64, PersistError> {
        Ok(self.best)
    }

    fn save_best(&mut self, score: u64) -> Result<(), PersistError> {
        self.best = score;
        self.writes += 1;
        Ok(())
    }
}
