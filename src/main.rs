//! Side Scroller entry point
//!
//! The simulation core has no renderer of its own; natively this runs a
//! headless autopilot session and reports the run like the game-over screen.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::PathBuf;

    use side_scroller::consts::FRAME_RATE;
    use side_scroller::persistence::JsonFileStore;
    use side_scroller::sim::{GamePhase, GameState, begin_session, finish_loading, tick};
    use side_scroller::{BestScore, Settings};

    /// Two minutes of play at the nominal frame rate
    const MAX_FRAMES: u32 = 120 * FRAME_RATE;

    env_logger::init();
    log::info!("Side Scroller (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let store_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("best_score.json"));

    let settings = Settings::load(&settings_path)?;
    let mut store = JsonFileStore::new(store_path);
    let mut best = BestScore::load(&store);

    let mut state = GameState::new(settings, best.score);
    finish_loading(&mut state);
    begin_session(&mut state);

    for frame in 0..MAX_FRAMES {
        // No display refresh to sample here, the frame clock stands in for wall time
        let now_ms = frame as f64 * 1000.0 / FRAME_RATE as f64;
        let input = autopilot::steer(&state, now_ms);
        tick(&mut state, &input);

        for event in state.drain_events() {
            log::debug!("frame {}: {:?}", state.frame, event);
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let hud = state.hud();
    println!(
        "Score: {}  Coins: {}  Lives: {}  Distance: {}",
        hud.score, hud.coins, hud.lives, hud.distance
    );
    match state.summary {
        Some(summary) => println!(
            "Game over after {} frames. Best score: {}{}",
            state.frame,
            summary.best_score,
            if summary.new_best { " (new!)" } else { "" }
        ),
        None => println!("Survived {} frames", state.frame),
    }

    if let Some(score) = state.best_to_save() {
        best.record(score);
        best.save(&mut store);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven by the presentation layer
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use side_scroller::sim::{GameState, TickInput};

    /// Look-ahead for enemies worth jumping at
    const THREAT_RANGE: f32 = 120.0;

    /// Run right, hop onto walkers and under coins
    pub fn steer(state: &GameState, now_ms: f64) -> TickInput {
        let player = &state.player;
        let center = player.center();

        let walker_ahead = state.enemies.iter().any(|e| {
            let dx = e.pos.x - center.x;
            e.kind.stompable() && dx > 0.0 && dx < THREAT_RANGE
        });
        let coin_overhead = state
            .coins
            .iter()
            .any(|c| !c.collected && (c.pos.x - center.x).abs() < 20.0 && c.pos.y < center.y);

        TickInput {
            right: true,
            jump: player.grounded && (walker_ahead || coin_overhead),
            now_ms,
            ..Default::default()
        }
    }
}
