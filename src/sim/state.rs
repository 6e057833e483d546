//! Game state and core simulation types
//!
//! All state for one session lives here; `tick` is the only mutator during play.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::wall::BrickWall;
use crate::config::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract mode: physics run cosmetically until a key is pressed
    WaitingToStart,
    /// Active gameplay
    Playing,
    /// Gameplay frozen until pause is pressed again
    Paused,
}

/// Named sound cues the simulation asks the audio collaborator to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits a side or top border
    WallHit,
    /// Ball destroys a brick
    BrickBreak,
}

/// Side effects produced by a tick, applied by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
    /// A brick was destroyed and its value added to the score
    Scored { points: u32, row: usize, col: usize },
    PaddleShrunk,
    /// The ball fell past the bottom; `attempts_used` is the new count
    AttemptLost { attempts_used: u32 },
    GameStarted,
    GameOver { score: u32 },
    /// Every brick was destroyed and the wall was rebuilt
    WallCleared,
    Paused,
    Resumed,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels per tick
    pub speed: f32,
    /// Width restored by `reset`
    default_width: f32,
}

impl Paddle {
    /// Create a centered paddle at its default width
    pub fn new(config: &GameConfig) -> Self {
        let mut paddle = Self {
            rect: Rect::new(0.0, config.paddle_y, config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
            default_width: config.paddle_width,
        };
        paddle.reset(config);
        paddle
    }

    /// Shift by one step per held direction, refusing steps that would leave the screen
    pub fn update(&mut self, left: bool, right: bool, config: &GameConfig) {
        if left && self.rect.pos.x - self.speed >= 0.0 {
            self.rect.pos.x -= self.speed;
        }
        if right && self.rect.pos.x + self.speed <= config.screen_width - self.rect.width() {
            self.rect.pos.x += self.speed;
        }
    }

    /// Halve the width. Callers gate this to once per attempt.
    pub fn shrink(&mut self, config: &GameConfig) {
        self.rect.size.x = (self.rect.size.x / 2.0).floor();
        self.clamp_x(config);
    }

    /// Restore the default width and re-center
    pub fn reset(&mut self, config: &GameConfig) {
        self.rect.size.x = self.default_width;
        self.rect.pos.x = ((config.screen_width - self.default_width) / 2.0).floor();
    }

    /// Span the whole screen (attract mode only)
    pub fn fill(&mut self, config: &GameConfig) {
        self.rect.size.x = config.screen_width;
        self.rect.pos.x = 0.0;
    }

    fn clamp_x(&mut self, config: &GameConfig) {
        let max_x = (config.screen_width - self.rect.width()).max(0.0);
        self.rect.pos.x = self.rect.pos.x.clamp(0.0, max_x);
    }
}

/// The ball, which also carries the running score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub score: u32,
    /// Counted paddle hits since the last reset
    pub hit_count: u32,
    /// Ticks since the last counted paddle hit
    pub ticks_since_hit: u32,
    /// Re-armed by the paddle or the top border; cleared by a brick hit
    pub can_hit_brick: bool,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        let x = (config.screen_width - config.ball_size) / 2.0;
        let y = (config.screen_height - config.ball_size) / 2.0;
        Self {
            rect: Rect::new(x, y, config.ball_size, config.ball_size),
            vel: Vec2::new(0.0, config.ball_start_vy),
            score: 0,
            hit_count: 0,
            ticks_since_hit: config.paddle_delay,
            can_hit_brick: true,
        }
    }

    /// Re-serve from near the center with a random drift, heading down
    pub fn reset(&mut self, rng: &mut impl Rng, config: &GameConfig) {
        let center_x = (config.screen_width - config.ball_size) / 2.0;
        let center_y = (config.screen_height - config.ball_size) / 2.0;
        self.rect.pos = Vec2::new(
            center_x + rng.random_range(-100.0..=100.0),
            center_y + rng.random_range(-50.0..=50.0),
        );
        self.vel = Vec2::new(
            rng.random_range(-config.ball_speed..=config.ball_speed),
            config.ball_start_vy,
        );
        self.clamp_velocity(config);
        self.can_hit_brick = true;
        self.hit_count = 0;
        self.ticks_since_hit = config.paddle_delay;
    }

    /// Enforce |vx| <= max_vx and |vy| <= max_vy
    pub fn clamp_velocity(&mut self, config: &GameConfig) {
        self.vel.x = self.vel.x.clamp(-config.max_vx, config.max_vx);
        self.vel.y = self.vel.y.clamp(-config.max_vy, config.max_vy);
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// 1-based index of the current attempt
    pub attempts_used: u32,
    pub max_attempts: u32,
    /// Set once the paddle has shrunk during the current attempt
    pub paddle_shrunk: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    pub wall: BrickWall,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a session in attract mode with a freshly built wall
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut paddle = Paddle::new(config);
        paddle.fill(config);
        let mut ball = Ball::new(config);
        ball.reset(&mut rng, config);

        Self {
            phase: GamePhase::WaitingToStart,
            attempts_used: 1,
            max_attempts: config.max_attempts,
            paddle_shrunk: false,
            paddle,
            ball,
            wall: BrickWall::new(config),
            time_ticks: 0,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.ball.score
    }

    /// Attract mode suppresses scoring, sound, and brick destruction
    pub fn is_menu_mode(&self) -> bool {
        self.phase == GamePhase::WaitingToStart
    }

    /// Re-serve the ball using the session RNG
    pub fn reset_ball(&mut self, config: &GameConfig) {
        self.ball.reset(&mut self.rng, config);
    }
}
