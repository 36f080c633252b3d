//! Game state and core simulation types
//!
//! Everything the frame driver mutates lives in [`GameState`]; components
//! receive it by `&mut` rather than reaching for globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::progress::Progress;
use crate::consts::*;
use crate::settings::Settings;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Presentation still starting up
    Loading,
    /// Title screen, waiting for a begin command
    Start,
    /// Active gameplay
    Playing,
    /// Simulation frozen
    Paused,
    /// Out of lives
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the player box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// +1 facing right, -1 facing left
    pub facing: f32,
    pub grounded: bool,
    pub speed: f32,
    pub jump_power: f32,
}

impl Player {
    pub fn new(scale: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_BASE_SIZE * scale),
            facing: 1.0,
            grounded: false,
            speed: BASE_SPEED,
            jump_power: BASE_JUMP_POWER,
        }
    }

    /// Move back to the session start
    pub fn reset(&mut self) {
        self.pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        self.vel = Vec2::ZERO;
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Switch between base and powered-up movement
    pub fn set_powered(&mut self, powered: bool) {
        if powered {
            self.speed = POWERED_SPEED;
            self.jump_power = POWERED_JUMP_POWER;
        } else {
            self.speed = BASE_SPEED;
            self.jump_power = BASE_JUMP_POWER;
        }
    }
}

/// A solid platform (one-way: only landings from above collide)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height: PLATFORM_HEIGHT,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub collected: bool,
    pub radius: f32,
}

impl Coin {
    /// A row of `count` coins hovering above `platform`
    pub fn row_above(platform: &Platform, count: u32, scale: f32) -> Vec<Coin> {
        (0..count)
            .map(|i| Coin {
                pos: Vec2::new(
                    platform.left() + COIN_OFFSET_X + i as f32 * COIN_SPACING,
                    platform.top() - COIN_HOVER,
                ),
                collected: false,
                radius: COIN_BASE_RADIUS * scale,
            })
            .collect()
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks along its platform, can be stomped
    Ground,
    /// Flies back and forth past the platform edges
    Jet,
    /// Rises and falls above its platform
    Rocket,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Ground, EnemyKind::Jet, EnemyKind::Rocket];

    /// Only ground enemies can be defeated by landing on them
    pub fn stompable(&self) -> bool {
        *self == EnemyKind::Ground
    }
}

/// Patrol range, inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Patrol {
    Horizontal { min_x: f32, max_x: f32 },
    Vertical { min_y: f32, max_y: f32 },
}

/// A patrolling hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub kind: EnemyKind,
    pub facing: f32,
    pub patrol: Patrol,
}

impl Enemy {
    /// Spawn an enemy of `kind` on `platform`; `heading` (±1) picks the
    /// initial horizontal direction for walkers and flyers
    pub fn spawn_on(kind: EnemyKind, platform: &Platform, scale: f32, heading: f32) -> Self {
        let x = platform.left() + 50.0;
        let top = platform.top();
        match kind {
            EnemyKind::Ground => Self {
                pos: Vec2::new(x, top - 30.0 * scale),
                vel: Vec2::new(2.0 * heading, 0.0),
                size: Vec2::splat(30.0 * scale),
                kind,
                facing: heading,
                patrol: Patrol::Horizontal {
                    min_x: platform.left(),
                    max_x: platform.right(),
                },
            },
            EnemyKind::Jet => Self {
                pos: Vec2::new(x, top - 80.0),
                vel: Vec2::new(3.0 * heading, 0.0),
                size: Vec2::new(40.0, 25.0) * scale,
                kind,
                facing: heading,
                patrol: Patrol::Horizontal {
                    min_x: platform.left() - 100.0,
                    max_x: platform.right() + 100.0,
                },
            },
            EnemyKind::Rocket => Self {
                pos: Vec2::new(x, top - 150.0),
                vel: Vec2::new(0.0, 3.0),
                size: Vec2::new(30.0, 40.0) * scale,
                kind,
                facing: 1.0,
                patrol: Patrol::Vertical {
                    min_y: top - 200.0,
                    max_y: top - 50.0,
                },
            },
        }
    }

    /// Advance one frame along the patrol, turning around outside the range
    pub fn patrol_step(&mut self) {
        match self.patrol {
            Patrol::Horizontal { min_x, max_x } => {
                self.pos.x += self.vel.x;
                if self.pos.x < min_x || self.pos.x > max_x {
                    self.vel.x = -self.vel.x;
                    self.facing = -self.facing;
                }
            }
            Patrol::Vertical { min_y, max_y } => {
                self.pos.y += self.vel.y;
                if self.pos.y < min_y || self.pos.y > max_y {
                    self.vel.y = -self.vel.y;
                    self.facing = -self.facing;
                }
            }
        }
    }
}

/// Side effects for the presentation layer (sound, overlays)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Paused,
    Resumed,
    Jumped,
    CoinCollected { combo: u32 },
    ComboCelebration { combo: u32 },
    PowerUpStarted,
    PowerUpEnded,
    EnemyStomped { kind: EnemyKind },
    PlayerDied { lives_left: u8 },
    GameOver { score: u64, new_best: bool },
    ReturnedToMenu,
}

/// Overlay text with a frame countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub frames_left: u32,
}

impl Message {
    /// Fade-out opacity in [0, 1]
    pub fn alpha(&self) -> f32 {
        self.frames_left as f32 / MESSAGE_FRAMES as f32
    }
}

/// HUD counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub coins: u32,
    pub lives: u8,
    pub distance: u32,
}

/// Final results shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub distance: u32,
    pub coins: u32,
    pub best_score: u64,
    pub new_best: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    /// Simulated frames this session
    pub frame: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Left edge of the view in world x
    pub camera_x: f32,
    /// Frontier: world x up to which chunks have been generated
    pub last_platform_x: f32,
    pub progress: Progress,
    pub message: Option<Message>,
    pub summary: Option<RunSummary>,
    /// Pending side effects, drained by the presentation layer
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state in the loading phase; the seed comes from settings or is random
    pub fn new(settings: Settings, best_score: u64) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(seed, settings, best_score)
    }

    pub fn with_seed(seed: u64, settings: Settings, best_score: u64) -> Self {
        let player = Player::new(settings.player_scale());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            phase: GamePhase::Loading,
            frame: 0,
            player,
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            camera_x: 0.0,
            last_platform_x: 0.0,
            progress: Progress::new(best_score),
            message: None,
            summary: None,
            events: Vec::new(),
        }
    }

    /// Drop all entities and rewind the frontier
    pub fn clear_world(&mut self) {
        self.platforms.clear();
        self.coins.clear();
        self.enemies.clear();
        self.last_platform_x = 0.0;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            frames_left: MESSAGE_FRAMES,
        });
    }

    /// Show a message picked at random from `pool`
    pub fn show_random_message(&mut self, pool: &[&str]) {
        if pool.is_empty() {
            return;
        }
        let text = pool[self.rng.random_range(0..pool.len())];
        self.show_message(text);
    }

    /// Count down the overlay message
    pub fn tick_message(&mut self) {
        if let Some(message) = &mut self.message {
            message.frames_left = message.frames_left.saturating_sub(1);
            if message.frames_left == 0 {
                self.message = None;
            }
        }
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.progress.score,
            coins: self.progress.coins,
            lives: self.progress.lives,
            distance: self.progress.distance,
        }
    }

    pub fn best_score(&self) -> u64 {
        self.progress.best.score
    }

    /// Best score worth persisting: only set after a game over that beat the old best
    pub fn best_to_save(&self) -> Option<u64> {
        self.summary
            .filter(|summary| summary.new_best)
            .map(|summary| summary.best_score)
    }

    /// Current combo and whether its window is still open
    pub fn combo(&self, now_ms: f64) -> (u32, bool) {
        (self.progress.combo, self.progress.combo_active(now_ms))
    }

    /// Power-up flag and remaining fraction
    pub fn power_up(&self) -> (bool, f32) {
        (
            self.progress.power_up_active(),
            self.progress.power_up_fraction(),
        )
    }

    /// Only the playing phase advances the world
    pub fn is_simulating(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = GameState::with_seed(1, Settings::default(), 250);
        assert_eq!(state.phase, GamePhase::Loading);
        assert_eq!(state.best_score(), 250);
        assert_eq!(state.player.pos, Vec2::new(100.0, 400.0));
        assert_eq!(state.player.size, Vec2::splat(32.0));
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn test_best_to_save_needs_new_best_game_over() {
        let mut state = GameState::with_seed(1, Settings::default(), 500);
        state.progress.award(900);
        // Still running: nothing to write back whatever the score
        assert_eq!(state.best_to_save(), None);

        let summary = RunSummary {
            score: 400,
            distance: 3,
            coins: 2,
            best_score: 500,
            new_best: false,
        };
        state.summary = Some(summary);
        assert_eq!(state.best_to_save(), None);

        state.summary = Some(RunSummary {
            score: 900,
            best_score: 900,
            new_best: true,
            ..summary
        });
        assert_eq!(state.best_to_save(), Some(900));
    }

    #[test]
    fn test_mobile_player_is_larger() {
        let settings = Settings {
            device: crate::DeviceClass::Mobile,
            ..Settings::default()
        };
        let state = GameState::with_seed(1, settings, 0);
        assert_eq!(state.player.size, Vec2::splat(64.0));
    }

    #[test]
    fn test_coin_row_relative_to_platform() {
        let platform = Platform::new(1200.0, 400.0, 120.0);
        let coins = Coin::row_above(&platform, 3, 1.0);
        let xs: Vec<f32> = coins.iter().map(|c| c.pos.x).collect();
        assert_eq!(xs, vec![1220.0, 1260.0, 1300.0]);
        assert!(coins.iter().all(|c| c.pos.y == 350.0 && !c.collected));
    }

    #[test]
    fn test_enemy_spawn_bounds() {
        let platform = Platform::new(800.0, 420.0, 100.0);

        let ground = Enemy::spawn_on(EnemyKind::Ground, &platform, 1.0, -1.0);
        assert_eq!(ground.pos, Vec2::new(850.0, 390.0));
        assert_eq!(ground.vel.x, -2.0);
        assert_eq!(
            ground.patrol,
            Patrol::Horizontal {
                min_x: 800.0,
                max_x: 900.0
            }
        );

        let jet = Enemy::spawn_on(EnemyKind::Jet, &platform, 1.0, 1.0);
        assert_eq!(
            jet.patrol,
            Patrol::Horizontal {
                min_x: 700.0,
                max_x: 1000.0
            }
        );

        let rocket = Enemy::spawn_on(EnemyKind::Rocket, &platform, 1.0, 1.0);
        assert_eq!(rocket.vel, Vec2::new(0.0, 3.0));
        assert_eq!(
            rocket.patrol,
            Patrol::Vertical {
                min_y: 220.0,
                max_y: 370.0
            }
        );
    }

    #[test]
    fn test_patrol_turns_around() {
        let platform = Platform::new(0.0, 400.0, 80.0);
        let mut enemy = Enemy::spawn_on(EnemyKind::Ground, &platform, 1.0, 1.0);
        // x starts at 50, bound is [0, 80]
        for _ in 0..16 {
            enemy.patrol_step();
        }
        assert_eq!(enemy.pos.x, 82.0);
        assert_eq!(enemy.vel.x, -2.0);
        assert_eq!(enemy.facing, -1.0);
        enemy.patrol_step();
        assert_eq!(enemy.pos.x, 80.0);
        assert_eq!(enemy.vel.x, -2.0);
    }

    #[test]
    fn test_message_countdown() {
        let mut state = GameState::with_seed(3, Settings::default(), 0);
        state.show_message("HELLO");
        assert_eq!(state.message.as_ref().unwrap().alpha(), 1.0);
        for _ in 0..MESSAGE_FRAMES - 1 {
            state.tick_message();
        }
        assert_eq!(state.message.as_ref().unwrap().frames_left, 1);
        state.tick_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::with_seed(3, Settings::default(), 0);
        state.push_event(GameEvent::Jumped);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
        assert!(state.drain_events().is_empty());
    }
}
