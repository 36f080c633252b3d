//! Player and enemy motion
//!
//! Semi-implicit Euler at one step per frame: input and gravity update the
//! velocity first, then the position integrates it.

use super::collision::lands_on;
use super::state::{GameEvent, GameState};
use super::tick::TickInput;
use crate::consts::GRAVITY;
use crate::distance_for;

/// Move the player one frame, resolve floor/platform landings and follow with the camera
///
/// Returns true if the player dropped below the bottom of the viewport.
pub fn update_player(state: &mut GameState, input: &TickInput) -> bool {
    let floor_y = state.settings.floor_y();
    let half_width = state.settings.half_width();
    let viewport_height = state.settings.viewport_height;
    let solid_floor = state.settings.solid_floor;
    let player = &mut state.player;

    // Instant start/stop, no inertia
    if input.left {
        player.vel.x = -player.speed;
        player.facing = -1.0;
    } else if input.right {
        player.vel.x = player.speed;
        player.facing = 1.0;
    } else {
        player.vel.x = 0.0;
    }

    let jumped = input.jump && player.grounded;
    if jumped {
        player.vel.y = -player.jump_power;
        player.grounded = false;
    }

    player.vel.y += GRAVITY;
    player.pos += player.vel;

    // Grounded is re-derived every frame
    player.grounded = false;
    if solid_floor && player.bottom() >= floor_y {
        player.pos.y = floor_y - player.size.y;
        player.vel.y = 0.0;
        player.grounded = true;
    }
    for platform in &state.platforms {
        if lands_on(player, platform) {
            player.pos.y = platform.top() - player.size.y;
            player.vel.y = 0.0;
            player.grounded = true;
        }
    }

    let fell_out = player.pos.y > viewport_height;
    let player_x = player.pos.x;

    if jumped {
        state.push_event(GameEvent::Jumped);
    }
    state.camera_x = (player_x - half_width).max(0.0);
    state.progress.distance = distance_for(player_x);

    fell_out
}

/// Move every enemy along its patrol
pub fn update_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.patrol_step();
    }
}
