//! Viewport and device settings
//!
//! Persisted as JSON next to the best score. Everything that scales with the
//! display (player, coin and enemy sizes) is derived from here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::FLOOR_OFFSET;
use crate::persistence::PersistError;

/// Viewports narrower than this are treated as mobile regardless of device
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0;

/// Device class, selects the presentation scale factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Desktop => "Desktop",
            DeviceClass::Mobile => "Mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "desktop" | "pc" => Some(DeviceClass::Desktop),
            "mobile" | "phone" | "tablet" => Some(DeviceClass::Mobile),
            _ => None,
        }
    }

    /// Player sprite scale
    pub fn player_scale(&self) -> f32 {
        match self {
            DeviceClass::Desktop => 1.0,
            DeviceClass::Mobile => 2.0,
        }
    }

    /// Coin radius scale
    pub fn coin_scale(&self) -> f32 {
        match self {
            DeviceClass::Desktop => 1.0,
            DeviceClass::Mobile => 1.5,
        }
    }

    /// Enemy size scale
    pub fn enemy_scale(&self) -> f32 {
        match self {
            DeviceClass::Desktop => 1.0,
            DeviceClass::Mobile => 2.0,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Visible world width in units
    pub viewport_width: f32,
    /// Visible world height in units
    pub viewport_height: f32,
    /// Device the game runs on
    pub device: DeviceClass,
    /// Floor plane under the whole world; without it missed jumps fall out of view
    pub solid_floor: bool,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            device: DeviceClass::Desktop,
            solid_floor: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings for a given viewport
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Device class actually used for scaling (narrow viewports count as mobile)
    pub fn effective_device(&self) -> DeviceClass {
        if self.viewport_width < MOBILE_WIDTH_THRESHOLD {
            DeviceClass::Mobile
        } else {
            self.device
        }
    }

    pub fn half_width(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// World y of the floor plane
    pub fn floor_y(&self) -> f32 {
        self.viewport_height - FLOOR_OFFSET
    }

    pub fn player_scale(&self) -> f32 {
        self.effective_device().player_scale()
    }

    pub fn coin_scale(&self) -> f32 {
        self.effective_device().coin_scale()
    }

    pub fn enemy_scale(&self) -> f32 {
        self.effective_device().enemy_scale()
    }

    /// Load settings from a JSON file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
