//! Collision and proximity tests
//!
//! Platforms are one-way: the player only collides when landing on the top
//! face from above. Coins and enemies use a square proximity box around the
//! player's center rather than shape overlap.

use glam::Vec2;

use super::state::{Enemy, Platform, Player};
use crate::consts::{LANDING_TOLERANCE, PICKUP_RANGE};

/// Outcome of touching an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyContact {
    /// Landed on a stompable enemy from above
    Stomp,
    /// Any other touch
    Lethal,
}

/// Open-interval overlap of two horizontal spans
#[inline]
pub fn spans_overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> bool {
    a_right > b_left && a_left < b_right
}

/// Whether the player lands on `platform` this frame
///
/// The bottom edge must lie in `[top, top + LANDING_TOLERANCE]` and the
/// player must not be rising.
pub fn lands_on(player: &Player, platform: &Platform) -> bool {
    let bottom = player.bottom();
    spans_overlap(
        player.pos.x,
        player.right(),
        platform.left(),
        platform.right(),
    ) && bottom >= platform.top()
        && bottom <= platform.top() + LANDING_TOLERANCE
        && player.vel.y >= 0.0
}

/// Both axes within `PICKUP_RANGE` (exclusive)
#[inline]
pub fn within_reach(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < PICKUP_RANGE && (a.y - b.y).abs() < PICKUP_RANGE
}

/// Classify contact between the player and an enemy, `None` when out of reach
pub fn enemy_contact(player: &Player, enemy: &Enemy) -> Option<EnemyContact> {
    if !within_reach(player.center(), enemy.pos) {
        return None;
    }
    let falling = player.vel.y > 0.0;
    let above = player.pos.y < enemy.pos.y;
    if enemy.kind.stompable() && falling && above {
        Some(EnemyContact::Stomp)
    } else {
        Some(EnemyContact::Lethal)
    }
}
