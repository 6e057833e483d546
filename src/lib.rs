//! Brick Breaker - a paddle-and-ball brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, brick wall, session rules)
//! - `config`: Immutable game configuration with optional JSON overrides
//! - `game`: Frame loop driver wiring the simulation to its collaborators
//! - `platform`: Input collaborator interface
//! - `renderer`: Draw command interface and frame composition
//! - `audio`: Sound cue interface

pub mod audio;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameControl, Game};

/// Game configuration defaults
pub mod consts {
    /// Target frame rate; the simulation advances one tick per frame
    pub const FRAME_RATE: u32 = 60;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Thickness of the side and top borders the ball bounces off
    pub const BORDER: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 70.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_Y: f32 = 560.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Minimum ticks between two counted paddle hits
    pub const PADDLE_DELAY: u32 = 10;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    /// Horizontal launch speed range is [-BALL_SPEED, BALL_SPEED]
    pub const BALL_SPEED: f32 = 4.0;
    /// Downward speed after a reset
    pub const BALL_START_VY: f32 = 4.0;
    pub const MAX_VX: f32 = 6.0;
    pub const MAX_VY: f32 = 7.0;
    /// Added to |vy| when the hit count reaches a milestone
    pub const VY_BOOST: f32 = 1.0;
    pub const HIT_MILESTONES: [u32; 2] = [4, 12];

    /// Brick wall layout
    pub const BRICK_ROWS: usize = 8;
    pub const BRICK_COLUMNS: usize = 14;
    pub const BRICK_HEIGHT: f32 = 16.0;
    pub const BRICK_GAP: f32 = 2.0;
    pub const WALL_TOP: f32 = 80.0;

    /// Lives per game
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Default RNG seed for ball resets
    pub const DEFAULT_SEED: u64 = 0x5eed_b41c;
}
