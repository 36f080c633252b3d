//! Procedural world generation
//!
//! Extends the world one chunk at a time from the frontier.

use rand::Rng;

use super::patterns::{ChunkTemplate, PATTERNS};
use super::state::{Coin, Enemy, EnemyKind, GameState, Platform};
use crate::consts::*;

/// Generate the next chunk at the frontier and advance the frontier by one chunk width
///
/// Returns the index of the template used.
pub fn generate_chunk(state: &mut GameState) -> usize {
    let index = state.rng.random_range(0..PATTERNS.len());
    build_chunk(state, &PATTERNS[index]);
    index
}

/// Instantiate `template` at the current frontier
pub fn build_chunk(state: &mut GameState, template: &ChunkTemplate) {
    let frontier = state.last_platform_x;
    let coin_scale = state.settings.coin_scale();
    let enemy_scale = state.settings.enemy_scale();

    for slot in template.platforms {
        let platform = Platform::new(frontier + slot.dx, slot.dy, slot.width);
        state.platforms.push(platform);

        if state.rng.random_bool(COIN_SPAWN_CHANCE) {
            let count = state.rng.random_range(1..=MAX_COINS_PER_PLATFORM);
            state
                .coins
                .extend(Coin::row_above(&platform, count, coin_scale));
        }

        if state.rng.random_bool(ENEMY_SPAWN_CHANCE) {
            let kind = EnemyKind::ALL[state.rng.random_range(0..EnemyKind::ALL.len())];
            let heading = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
            state
                .enemies
                .push(Enemy::spawn_on(kind, &platform, enemy_scale, heading));
        }
    }

    state.last_platform_x += CHUNK_WIDTH;
    log::debug!(
        "Chunk with {} platforms, frontier now {}",
        template.platforms.len(),
        state.last_platform_x
    );
}

/// Clear the world and pre-generate the opening chunks
pub fn initialize_world(state: &mut GameState) {
    state.clear_world();
    for _ in 0..INITIAL_CHUNKS {
        generate_chunk(state);
    }
    log::info!(
        "World initialized: {} platforms, {} coins, {} enemies",
        state.platforms.len(),
        state.coins.len(),
        state.enemies.len()
    );
}
