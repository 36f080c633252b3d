//! Side Scroller - an endless side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (world generation, physics, encounters, game state)
//! - `settings`: Viewport and device configuration
//! - `persistence`: Best-score storage with a versioned JSON envelope
//! - `highscores`: Best-score bookkeeping

pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use highscores::BestScore;
pub use settings::{DeviceClass, Settings};

/// Game configuration constants
///
/// All distances are world units (pixels at scale 1), all velocities are
/// units per frame and all timers are frames unless the name says otherwise.
pub mod consts {
    /// Nominal display refresh the frame timers are tuned for
    pub const FRAME_RATE: u32 = 60;

    /// Player defaults
    pub const PLAYER_BASE_SIZE: f32 = 32.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 400.0;
    pub const BASE_SPEED: f32 = 5.0;
    pub const BASE_JUMP_POWER: f32 = 13.0;
    /// Added to vertical velocity every frame
    pub const GRAVITY: f32 = 0.6;

    /// The floor plane sits this far above the bottom of the viewport
    pub const FLOOR_OFFSET: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Depth of the band below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 20.0;

    /// World window
    pub const CHUNK_WIDTH: f32 = 600.0;
    pub const EVICTION_MARGIN: f32 = 200.0;
    pub const LOOKAHEAD_MARGIN: f32 = 1000.0;
    pub const INITIAL_CHUNKS: usize = 10;

    /// Chunk decoration
    pub const COIN_SPAWN_CHANCE: f64 = 0.6;
    pub const ENEMY_SPAWN_CHANCE: f64 = 0.4;
    pub const MAX_COINS_PER_PLATFORM: u32 = 3;
    pub const COIN_OFFSET_X: f32 = 20.0;
    pub const COIN_SPACING: f32 = 40.0;
    pub const COIN_HOVER: f32 = 50.0;
    pub const COIN_BASE_RADIUS: f32 = 12.0;

    /// Encounters
    pub const PICKUP_RANGE: f32 = 30.0;
    pub const COIN_SCORE: u64 = 100;
    pub const STOMP_SCORE: u64 = 200;
    /// Upward velocity applied after stomping an enemy
    pub const STOMP_BOUNCE: f32 = 8.0;
    pub const COMBO_WINDOW_MS: f64 = 1000.0;
    pub const COMBO_CELEBRATION: u32 = 3;

    /// Power-up
    pub const POWER_UP_CHANCE: f64 = 0.05;
    pub const POWER_UP_FRAMES: u32 = 5 * FRAME_RATE;
    pub const POWERED_SPEED: f32 = 7.0;
    pub const POWERED_JUMP_POWER: f32 = 15.0;

    /// Progression
    pub const STARTING_LIVES: u8 = 3;
    pub const DISTANCE_UNIT: f32 = 100.0;
    pub const MESSAGE_FRAMES: u32 = FRAME_RATE;
}

/// Distance in whole units for a world x-coordinate (never negative)
#[inline]
pub fn distance_for(x: f32) -> u32 {
    (x / consts::DISTANCE_UNIT).floor().max(0.0) as u32
}
