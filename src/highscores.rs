//! Best score tracking
//!
//! A single scalar carried across sessions. It only ever moves up.

use serde::{Deserialize, Serialize};

use crate::persistence::ScoreStore;

/// Best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u64,
}

impl BestScore {
    pub fn new(score: u64) -> Self {
        Self { score }
    }

    /// Whether a finished run beats the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.score
    }

    /// Record a finished run, returns true if it became the new best
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.score = score;
        true
    }

    /// Load from a store, starting fresh if the store is unreadable
    pub fn load(store: &dyn ScoreStore) -> Self {
        match store.load_best() {
            Ok(score) => Self::new(score),
            Err(e) => {
                log::warn!("Could not read best score ({e}), starting fresh");
                Self::default()
            }
        }
    }

    /// Write back to a store, logging failures
    pub fn save(&self, store: &mut dyn ScoreStore) {
        if let Err(e) = store.save_best(self.score) {
            log::warn!("Could not save best score: {e}");
        }
    }
}
