//! Player vs. coin and player vs. enemy encounters

use rand::Rng;

use super::collision::{EnemyContact, enemy_contact, within_reach};
use super::messages::{CELEBRATION_MESSAGES, DEATH_MESSAGES, POWER_UP_MESSAGE};
use super::state::{GameEvent, GameState};
use super::tick::end_session;
use crate::consts::*;

/// Resolve this frame's pickups and enemy contacts
///
/// `now_ms` is the monotonic wall-clock time of the frame, used only for the
/// combo window. Returns true if the player died.
pub fn resolve_encounters(state: &mut GameState, now_ms: f64) -> bool {
    collect_coins(state, now_ms);
    resolve_enemies(state)
}

/// Pick up every uncollected coin in reach of the player's center
pub fn collect_coins(state: &mut GameState, now_ms: f64) -> u32 {
    let center = state.player.center();
    let mut picked = 0;
    for coin in state.coins.iter_mut().filter(|c| !c.collected) {
        if within_reach(center, coin.pos) {
            coin.collected = true;
            picked += 1;
        }
    }

    for _ in 0..picked {
        let combo = state.progress.record_coin(now_ms);
        state.push_event(GameEvent::CoinCollected { combo });
        if combo >= COMBO_CELEBRATION {
            state.push_event(GameEvent::ComboCelebration { combo });
            state.show_random_message(&CELEBRATION_MESSAGES);
        }
        if state.rng.random_bool(POWER_UP_CHANCE) {
            activate_power_up(state);
        }
    }
    picked
}

/// Start or refresh the power-up; it never stacks
pub fn activate_power_up(state: &mut GameState) {
    state.progress.start_power_up();
    state.player.set_powered(true);
    state.show_message(POWER_UP_MESSAGE);
    state.push_event(GameEvent::PowerUpStarted);
}

/// Stomp or die against each enemy in reach; stops at the first lethal contact
pub fn resolve_enemies(state: &mut GameState) -> bool {
    let mut i = 0;
    while i < state.enemies.len() {
        match enemy_contact(&state.player, &state.enemies[i]) {
            Some(EnemyContact::Stomp) => {
                let enemy = state.enemies.remove(i);
                state.progress.award(STOMP_SCORE);
                state.player.vel.y = -STOMP_BOUNCE;
                state.push_event(GameEvent::EnemyStomped { kind: enemy.kind });
            }
            Some(EnemyContact::Lethal) => {
                kill_player(state);
                return true;
            }
            None => i += 1,
        }
    }
    false
}

/// Lose a life: respawn at the start, or end the session when none remain
pub fn kill_player(state: &mut GameState) {
    let was_powered = state.progress.power_up_active();
    let survived = state.progress.lose_life();
    state.player.set_powered(false);
    if was_powered {
        state.push_event(GameEvent::PowerUpEnded);
    }
    state.push_event(GameEvent::PlayerDied {
        lives_left: state.progress.lives,
    });
    state.show_random_message(&DEATH_MESSAGES);

    if survived {
        state.player.reset();
        state.camera_x = 0.0;
    } else {
        end_session(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::state::{Coin, Enemy, EnemyKind, GamePhase, Platform};
    use glam::Vec2;

    fn playing() -> GameState {
        let mut state = GameState::with_seed(4, Settings::default(), 0);
        state.phase = GamePhase::Playing;
        state
    }

    /// Place a coin so the player's center is right on it
    fn coin_on_player(state: &mut GameState) {
        let center = state.player.center();
        state.coins.push(Coin {
            pos: center + Vec2::new(5.0, -5.0),
            collected: false,
            radius: COIN_BASE_RADIUS,
        });
    }

    #[test]
    fn test_collect_coin() {
        let mut state = playing();
        coin_on_player(&mut state);
        assert_eq!(collect_coins(&mut state, 0.0), 1);
        assert!(state.coins[0].collected);
        assert_eq!(state.progress.coins, 1);
        assert_eq!(state.progress.score, 100);
        // Already collected coins don't count twice
        assert_eq!(collect_coins(&mut state, 10.0), 0);
    }

    #[test]
    fn test_combo_scores_and_celebration() {
        let mut state = playing();
        let times = [0.0, 500.0, 1600.0, 1700.0, 1800.0];
        let mut combos = Vec::new();
        for t in times {
            coin_on_player(&mut state);
            collect_coins(&mut state, t);
            combos.push(state.progress.combo);
        }
        assert_eq!(combos, vec![1, 2, 1, 2, 3]);
        assert_eq!(state.progress.score, 100 + 200 + 100 + 200 + 300);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ComboCelebration { combo: 3 }));
        assert!(state.message.is_some());
    }

    #[test]
    fn test_far_coin_ignored() {
        let mut state = playing();
        let platform = Platform::new(2000.0, 400.0, 100.0);
        state.coins = Coin::row_above(&platform, 2, 1.0);
        assert_eq!(collect_coins(&mut state, 0.0), 0);
    }

    #[test]
    fn test_power_up_activation() {
        let mut state = playing();
        activate_power_up(&mut state);
        assert_eq!(state.player.speed, POWERED_SPEED);
        assert_eq!(state.player.jump_power, POWERED_JUMP_POWER);
        assert_eq!(state.progress.power_up_frames, POWER_UP_FRAMES);
        assert_eq!(state.message.as_ref().unwrap().text, POWER_UP_MESSAGE);

        // Second activation refreshes, doesn't stack
        state.progress.power_up_frames = 10;
        activate_power_up(&mut state);
        assert_eq!(state.player.speed, POWERED_SPEED);
        assert_eq!(state.progress.power_up_frames, POWER_UP_FRAMES);
    }

    #[test]
    fn test_power_up_eventually_rolls() {
        let mut state = playing();
        let mut t = 0.0;
        while !state.progress.power_up_active() && t < 1_000_000.0 {
            coin_on_player(&mut state);
            collect_coins(&mut state, t);
            t += 5000.0;
        }
        assert!(state.progress.power_up_active());
    }

    fn enemy_at_player(state: &mut GameState, kind: EnemyKind, dy: f32) {
        let platform = Platform::new(0.0, 400.0, 300.0);
        let mut enemy = Enemy::spawn_on(kind, &platform, 1.0, 1.0);
        enemy.pos = state.player.center() + Vec2::new(0.0, dy);
        state.enemies.push(enemy);
    }

    #[test]
    fn test_stomp_ground_enemy() {
        let mut state = playing();
        state.player.vel.y = 4.0;
        enemy_at_player(&mut state, EnemyKind::Ground, 20.0);
        assert!(!resolve_enemies(&mut state));
        assert!(state.enemies.is_empty());
        assert_eq!(state.progress.score, STOMP_SCORE);
        assert_eq!(state.player.vel.y, -STOMP_BOUNCE);
        assert_eq!(state.progress.lives, STARTING_LIVES);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::EnemyStomped {
                kind: EnemyKind::Ground
            }]
        );
    }

    #[test]
    fn test_ground_enemy_kills_from_side() {
        let mut state = playing();
        state.player.pos.x = 900.0;
        state.camera_x = 500.0;
        state.player.vel.y = 0.0;
        enemy_at_player(&mut state, EnemyKind::Ground, 0.0);
        assert!(resolve_enemies(&mut state));
        assert_eq!(state.progress.lives, STARTING_LIVES - 1);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(state.camera_x, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_jet_kills_even_from_above() {
        let mut state = playing();
        state.player.vel.y = 4.0;
        enemy_at_player(&mut state, EnemyKind::Jet, 20.0);
        assert!(resolve_enemies(&mut state));
        assert_eq!(state.progress.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_death_clears_combo_and_power_up() {
        let mut state = playing();
        coin_on_player(&mut state);
        collect_coins(&mut state, 0.0);
        activate_power_up(&mut state);
        kill_player(&mut state);
        assert_eq!(state.progress.combo, 0);
        assert!(!state.progress.power_up_active());
        assert_eq!(state.player.speed, BASE_SPEED);
        assert!(state.message.is_some());
    }

    #[test]
    fn test_death_ends_power_up_with_event() {
        let mut state = playing();
        activate_power_up(&mut state);
        state.drain_events();
        kill_player(&mut state);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::PowerUpEnded,
                GameEvent::PlayerDied {
                    lives_left: STARTING_LIVES - 1
                }
            ]
        );

        // No power-up running, no end event
        kill_player(&mut state);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PlayerDied {
                lives_left: STARTING_LIVES - 2
            }]
        );
    }

    #[test]
    fn test_last_life_ends_session() {
        let mut state = GameState::with_seed(4, Settings::default(), 150);
        state.phase = GamePhase::Playing;
        state.progress.lives = 1;
        state.progress.award(400);
        enemy_at_player(&mut state, EnemyKind::Jet, 0.0);
        assert!(resolve_enemies(&mut state));
        assert_eq!(state.progress.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score(), 400);
        let summary = state.summary.unwrap();
        assert!(summary.new_best);
        assert_eq!(summary.score, 400);
    }
}
