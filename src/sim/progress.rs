//! Score, coins, lives, combo and power-up bookkeeping

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::highscores::BestScore;

/// Run progression counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u64,
    pub coins: u32,
    pub lives: u8,
    /// Whole distance units reached by the player
    pub distance: u32,
    /// Current coin streak (0 after a death)
    pub combo: u32,
    /// Wall-clock time of the previous pickup (ms, monotonic)
    pub last_coin_ms: Option<f64>,
    /// Remaining power-up frames (0 = inactive)
    pub power_up_frames: u32,
    /// Best score across sessions
    pub best: BestScore,
}

impl Progress {
    pub fn new(best_score: u64) -> Self {
        Self {
            score: 0,
            coins: 0,
            lives: STARTING_LIVES,
            distance: 0,
            combo: 0,
            last_coin_ms: None,
            power_up_frames: 0,
            best: BestScore::new(best_score),
        }
    }

    /// Reset for a new session (best score survives)
    pub fn reset(&mut self) {
        *self = Self {
            best: self.best,
            ..Self::new(0)
        };
    }

    /// Count a coin pickup at `now_ms` and award its score, returns the new combo
    pub fn record_coin(&mut self, now_ms: f64) -> u32 {
        self.coins += 1;
        let in_window = self
            .last_coin_ms
            .is_some_and(|last| now_ms - last < COMBO_WINDOW_MS);
        if in_window {
            self.combo += 1;
            self.score += COIN_SCORE * self.combo as u64;
        } else {
            self.combo = 1;
            self.score += COIN_SCORE;
        }
        self.last_coin_ms = Some(now_ms);
        self.combo
    }

    pub fn award(&mut self, points: u64) {
        self.score += points;
    }

    /// Whether a multi-coin streak is still inside its window
    pub fn combo_active(&self, now_ms: f64) -> bool {
        self.combo > 1
            && self
                .last_coin_ms
                .is_some_and(|last| now_ms - last < COMBO_WINDOW_MS)
    }

    pub fn power_up_active(&self) -> bool {
        self.power_up_frames > 0
    }

    /// Start (or refresh) the power-up, returns true if it was already running
    pub fn start_power_up(&mut self) -> bool {
        let was_active = self.power_up_active();
        self.power_up_frames = POWER_UP_FRAMES;
        was_active
    }

    pub fn clear_power_up(&mut self) {
        self.power_up_frames = 0;
    }

    /// Count down one frame, returns true on the frame the power-up runs out
    pub fn tick_power_up(&mut self) -> bool {
        if self.power_up_frames == 0 {
            return false;
        }
        self.power_up_frames -= 1;
        self.power_up_frames == 0
    }

    /// Remaining power-up time in [0, 1] for the progress bar
    pub fn power_up_fraction(&self) -> f32 {
        self.power_up_frames as f32 / POWER_UP_FRAMES as f32
    }

    /// Lose a life, dropping the combo and power-up; returns true if lives remain
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.combo = 0;
        self.clear_power_up();
        self.lives > 0
    }

    /// Fold the current score into the best score, returns true on a new best
    pub fn record_best(&mut self) -> bool {
        self.best.record(self.score)
    }
}
