//! Fixed timestep simulation tick
//!
//! One tick per frame, in a fixed order: paddle, ball movement, paddle
//! collision, brick collision, then the bottom / top / cleared-wall rules.

use super::state::{GameEvent, GamePhase, GameState};
use crate::config::GameConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Any key pressed this frame (starts a game from attract mode)
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one tick and return the side effects it produced
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::Paused);
                log::info!("Paused");
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::Resumed);
                log::info!("Resumed");
            }
            GamePhase::WaitingToStart => {}
        }
    }

    match state.phase {
        GamePhase::Paused => {}

        GamePhase::WaitingToStart => {
            if input.start {
                start_game(state, config, &mut events);
                return events;
            }

            state.time_ticks += 1;

            // Attract mode: same physics, nothing scored or heard
            state.ball.advance(true, config, &mut events);
            state.ball.collide_with_paddle(&state.paddle, true, config, &mut events);
            state.ball.collide_with_bricks(&mut state.wall, true, config, &mut events);

            if state.ball.rect.bottom() >= config.screen_height {
                state.reset_ball(config);
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            state.paddle.update(input.left, input.right, config);
            state.ball.advance(false, config, &mut events);
            state.ball.collide_with_paddle(&state.paddle, false, config, &mut events);
            state.ball.collide_with_bricks(&mut state.wall, false, config, &mut events);

            if state.ball.rect.bottom() >= config.screen_height {
                lose_attempt(state, config, &mut events);
            } else if state.ball.rect.top() <= config.top_bound() && !state.paddle_shrunk {
                state.paddle.shrink(config);
                state.paddle_shrunk = true;
                events.push(GameEvent::PaddleShrunk);
                log::debug!("Paddle shrunk to {}", state.paddle.rect.width());
            }

            if state.phase == GamePhase::Playing && state.wall.is_cleared() {
                state.wall.build(config);
                state.reset_ball(config);
                events.push(GameEvent::WallCleared);
                log::info!("Wall cleared at score {}", state.score());
            }
        }
    }

    events
}

/// Leave attract mode and begin a fresh game
pub fn start_game(state: &mut GameState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    state.paddle.reset(config);
    state.reset_ball(config);
    state.ball.score = 0;
    state.attempts_used = 1;
    state.max_attempts = config.max_attempts;
    state.paddle_shrunk = false;
    state.wall.build(config);
    state.phase = GamePhase::Playing;
    events.push(GameEvent::GameStarted);
    log::info!("Game started ({} attempts)", state.max_attempts);
}

/// The ball fell past the bottom: spend an attempt, ending the game when none remain
fn lose_attempt(state: &mut GameState, config: &GameConfig, events: &mut Vec<GameEvent>) {
    state.reset_ball(config);
    state.paddle.reset(config);
    state.attempts_used += 1;
    state.paddle_shrunk = false;
    events.push(GameEvent::AttemptLost {
        attempts_used: state.attempts_used,
    });
    log::info!("Attempt lost ({}/{})", state.attempts_used, state.max_attempts);

    if state.attempts_used > state.max_attempts {
        let score = state.score();
        state.phase = GamePhase::WaitingToStart;
        state.paddle.fill(config);
        events.push(GameEvent::GameOver { score });
        log::info!("Game over with score {score}");
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::SoundCue;

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    fn playing_state(config: &GameConfig) -> GameState {
        let mut state = GameState::new(config);
        tick(&mut state, &start(), config);
        state
    }

    /// Put the ball just above the bottom edge, falling, clear of the paddle
    fn drop_ball(state: &mut GameState, config: &GameConfig) {
        state.paddle.rect.pos.x = 0.0;
        state.ball.rect.pos = Vec2::new(config.screen_width - 100.0, config.screen_height - 12.0);
        state.ball.vel = Vec2::new(0.0, 4.0);
    }

    #[test]
    fn test_any_key_starts_game() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);

        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.phase, GamePhase::WaitingToStart);
        assert!(events.is_empty());

        let events = tick(&mut state, &start(), &config);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events, vec![GameEvent::GameStarted]);
        assert_eq!(state.attempts_used, 1);
        assert_eq!(state.paddle.rect.width(), config.paddle_width);
    }

    #[test]
    fn test_three_falls_end_the_game() {
        let config = GameConfig::default();
        let mut state = playing_state(&config);
        state.ball.score = 42;

        for expected in 2..=3 {
            drop_ball(&mut state, &config);
            let events = tick(&mut state, &TickInput::default(), &config);
            assert!(events.contains(&GameEvent::AttemptLost { attempts_used: expected }));
            assert_eq!(state.phase, GamePhase::Playing);
        }

        drop_ball(&mut state, &config);
        let events = tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.attempts_used, 4);
        assert_eq!(state.phase, GamePhase::WaitingToStart);
        assert!(events.contains(&GameEvent::GameOver { score: 42 }));
        assert_eq!(state.paddle.rect.width(), config.screen_width);
    }

    #[test]
    fn test_restart_after_game_over_resets_session() {
        let config = GameConfig::default();
        let mut state = playing_state(&config);
        state.ball.score = 10;
        state.attempts_used = 3;
        state.wall.brick_mut(0, 0).unwrap().strength = 0;

        drop_ball(&mut state, &config);
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.phase, GamePhase::WaitingToStart);

        tick(&mut state, &start(), &config);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.attempts_used, 1);
        assert!(!state.paddle_shrunk);
        assert_eq!(state.wall.brick(0, 0).unwrap().strength, 4);
    }

    #[test]
    fn test_reaching_top_shrinks_paddle_once_per_attempt() {
        let config = GameConfig::default();
        let mut state = playing_state(&config);

        for _ in 0..2 {
            state.ball.rect.pos = Vec2::new(400.0, config.top_bound() + 1.0);
            state.ball.vel = Vec2::new(0.0, -3.0);
            tick(&mut state, &TickInput::default(), &config);
        }

        assert!(state.paddle_shrunk);
        assert_eq!(state.paddle.rect.width(), (config.paddle_width / 2.0).floor());

        // Losing the attempt restores the paddle and re-arms the shrink
        drop_ball(&mut state, &config);
        tick(&mut state, &TickInput::default(), &config);
        assert!(!state.paddle_shrunk);
        assert_eq!(state.paddle.rect.width(), config.paddle_width);
    }

    #[test]
    fn test_attract_mode_never_scores() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        let total = state.wall.remaining();

        for _ in 0..2000 {
            let events = tick(&mut state, &TickInput::default(), &config);
            assert!(events.is_empty());
        }

        assert_eq!(state.score(), 0);
        assert_eq!(state.wall.remaining(), total);
    }

    #[test]
    fn test_pause_freezes_play() {
        let config = GameConfig::default();
        let mut state = playing_state(&config);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        assert_eq!(tick(&mut state, &pause, &config), vec![GameEvent::Paused]);
        let pos = state.ball.rect.pos;
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), &config);
        assert_eq!(state.ball.rect.pos, pos);
        assert_eq!(state.time_ticks, ticks);

        let events = tick(&mut state, &pause, &config);
        assert_eq!(events[0], GameEvent::Resumed);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.ball.rect.pos, pos);
    }

    #[test]
    fn test_clearing_wall_rebuilds_it() {
        let config = GameConfig {
            brick_rows: 1,
            brick_columns: 1,
            ..GameConfig::default()
        };
        let mut state = playing_state(&config);
        let brick = state.wall.brick(0, 0).unwrap().rect;
        state.ball.rect.pos = Vec2::new(brick.left() + 5.0, brick.bottom() + 1.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        state.ball.can_hit_brick = true;

        let events = tick(&mut state, &TickInput::default(), &config);

        assert!(events.contains(&GameEvent::Sound(SoundCue::BrickBreak)));
        assert!(events.contains(&GameEvent::WallCleared));
        assert_eq!(state.wall.remaining(), 1);
        assert_eq!(state.score(), 7);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed produce identical results
        let config = GameConfig::default();
        let mut state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);

        let inputs = [
            start(),
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, &config);
                tick(&mut state2, input, &config);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.ball.rect.pos, state2.ball.rect.pos);
        assert_eq!(
            serde_json::to_string(&state1).unwrap(),
            serde_json::to_string(&state2).unwrap()
        );
    }
}
