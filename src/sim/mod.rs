//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform code:
//! - One step per frame, timers count frames
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s

pub mod collision;
pub mod encounter;
pub mod generate;
pub mod messages;
pub mod patterns;
pub mod physics;
pub mod progress;
pub mod state;
pub mod tick;
pub mod window;

pub use collision::{EnemyContact, enemy_contact, lands_on, within_reach};
pub use encounter::{kill_player, resolve_encounters};
pub use generate::{build_chunk, generate_chunk, initialize_world};
pub use patterns::{ChunkTemplate, PATTERNS, PlatformTemplate};
pub use physics::{update_enemies, update_player};
pub use progress::Progress;
pub use state::{
    Coin, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Hud, Message, Patrol, Platform,
    Player, RunSummary,
};
pub use tick::{
    TickInput, begin_session, finish_loading, pause, resume, return_to_menu, tick,
};
pub use window::{WindowStep, advance_window, evict_behind, needs_chunk};
