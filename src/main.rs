//! Brick Breaker entry point
//!
//! Runs the game loop headless: the autopilot plays, frames and cues go to
//! the log. `RUST_LOG=debug` shows brick breaks, `trace` shows every bounce.
//!
//! Usage: `brick-breaker [frames] [--fast]`

use brick_breaker::audio::LogCuePlayer;
use brick_breaker::consts::FRAME_RATE;
use brick_breaker::platform::Autopilot;
use brick_breaker::renderer::LogRenderer;
use brick_breaker::{FrameControl, Game, GameConfig};

/// Default run length: one minute at 60 Hz
const DEFAULT_FRAMES: u64 = 60 * 60;
/// Attract-mode frames before the autopilot presses a key
const START_DELAY: u64 = 90;

fn main() {
    env_logger::init();

    let mut frames = DEFAULT_FRAMES;
    let mut fast = false;
    for arg in std::env::args().skip(1) {
        if arg == "--fast" {
            fast = true;
        } else if let Ok(n) = arg.parse() {
            frames = n;
        } else {
            log::warn!("Ignoring unknown argument {arg:?}");
        }
    }

    let config = GameConfig::load_or_default();
    log::info!("Running {frames} frames{}", if fast { " unthrottled" } else { "" });

    let mut game = Game::new(
        &config,
        Autopilot::new(frames, START_DELAY),
        LogRenderer::new(),
        LogCuePlayer::new(),
    );

    if fast {
        while game.frame() == FrameControl::Continue {}
    } else {
        game.run(FRAME_RATE);
    }

    let stats = game.stats();
    log::info!(
        "Done: {} frames, {} games started, {} finished, {} bricks, best score {}, {} cues",
        stats.frames,
        stats.games_started,
        stats.games_finished,
        stats.bricks_destroyed,
        stats.best_score,
        game.audio().played(),
    );

    match serde_json::to_string(game.state()) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::warn!("Could not snapshot final state: {e}"),
    }
}
