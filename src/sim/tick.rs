//! Frame driver and session state machine
//!
//! One call to [`tick`] advances a playing session by exactly one frame:
//! window, physics, encounters, timers, in that order, with no early exit
//! except when the session ends mid-frame.

use super::encounter::{kill_player, resolve_encounters};
use super::generate::initialize_world;
use super::physics::{update_enemies, update_player};
use super::state::{GameEvent, GamePhase, GameState, Player, RunSummary};
use super::window::advance_window;

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Monotonic wall-clock time of this frame in milliseconds
    pub now_ms: f64,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // The toggle frame itself is not simulated
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                pause(state);
                return;
            }
            GamePhase::Paused => {
                resume(state);
                return;
            }
            _ => {}
        }
    }

    if !state.is_simulating() {
        return;
    }

    state.frame += 1;

    advance_window(state);

    let fell_out = update_player(state, input);
    update_enemies(state);
    if fell_out {
        kill_player(state);
        if !state.is_simulating() {
            return;
        }
    }

    resolve_encounters(state, input.now_ms);
    if !state.is_simulating() {
        return;
    }

    advance_timers(state);
}

/// Frame-count timers: power-up and overlay message
fn advance_timers(state: &mut GameState) {
    if state.progress.tick_power_up() {
        state.player.set_powered(false);
        state.push_event(GameEvent::PowerUpEnded);
    }
    state.tick_message();
}

/// Loading → Start
pub fn finish_loading(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Loading {
        log::debug!("finish_loading ignored in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Start;
    true
}

/// Start a fresh session: reset progression, player and camera, pre-generate the world
///
/// Accepted from the title screen, the game-over screen (restart) and while
/// paused (restart from pause).
pub fn begin_session(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver | GamePhase::Paused => {}
        _ => {
            log::debug!("begin_session ignored in {:?}", state.phase);
            return false;
        }
    }

    state.progress.reset();
    state.player = Player::new(state.settings.player_scale());
    state.camera_x = 0.0;
    state.frame = 0;
    state.message = None;
    state.summary = None;
    initialize_world(state);

    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::SessionStarted);
    log::info!("Session started (seed {})", state.seed);
    true
}

/// Playing → Paused
pub fn pause(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        log::debug!("pause ignored in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Paused;
    state.push_event(GameEvent::Paused);
    true
}

/// Paused → Playing
pub fn resume(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Paused {
        log::debug!("resume ignored in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::Resumed);
    true
}

/// Paused or GameOver → Start
pub fn return_to_menu(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => {
            state.phase = GamePhase::Start;
            state.push_event(GameEvent::ReturnedToMenu);
            true
        }
        _ => {
            log::debug!("return_to_menu ignored in {:?}", state.phase);
            false
        }
    }
}

/// Out of lives: freeze the session and fold the score into the best score
pub(crate) fn end_session(state: &mut GameState) {
    let new_best = state.progress.record_best();
    let score = state.progress.score;
    state.summary = Some(RunSummary {
        score,
        distance: state.progress.distance,
        coins: state.progress.coins,
        best_score: state.best_score(),
        new_best,
    });
    state.phase = GamePhase::GameOver;
    state.push_event(GameEvent::GameOver { score, new_best });
    log::info!(
        "Game over: score {}, distance {}, coins {}{}",
        score,
        state.progress.distance,
        state.progress.coins,
        if new_best { " (new best!)" } else { "" }
    );
}
