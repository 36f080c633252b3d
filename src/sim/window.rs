//! World window: retire content behind the camera, extend it ahead

use super::generate::generate_chunk;
use super::state::GameState;
use crate::consts::{EVICTION_MARGIN, LOOKAHEAD_MARGIN};

/// What one window step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStep {
    pub evicted: usize,
    pub generated: bool,
}

/// Evict stale entities, then generate at most one chunk if the frontier is too close
pub fn advance_window(state: &mut GameState) -> WindowStep {
    let evicted = evict_behind(state);
    let generated = needs_chunk(state);
    if generated {
        generate_chunk(state);
    }
    WindowStep { evicted, generated }
}

/// Remove every entity whose x is behind the eviction line, plus collected
/// coins; returns how many entities were removed
pub fn evict_behind(state: &mut GameState) -> usize {
    let cutoff = state.camera_x - EVICTION_MARGIN;
    let before = state.platforms.len() + state.coins.len() + state.enemies.len();

    state.platforms.retain(|p| p.left() >= cutoff);
    state.coins.retain(|c| !c.collected && c.pos.x >= cutoff);
    state.enemies.retain(|e| e.pos.x >= cutoff);

    before - (state.platforms.len() + state.coins.len() + state.enemies.len())
}

/// Whether the frontier is within the lookahead margin of the right edge of the view
pub fn needs_chunk(state: &GameState) -> bool {
    state.last_platform_x < state.camera_x + state.settings.viewport_width + LOOKAHEAD_MARGIN
}
