//! Game configuration
//!
//! Built from the compile-time defaults in [`crate::consts`]. A JSON file can
//! override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "BRICK_BREAKER_CONFIG";

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Immutable game configuration, passed by reference into the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Inset margin for wall bounces (border thickness)
    pub border: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_y: f32,
    pub paddle_speed: f32,
    pub paddle_delay: u32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_start_vy: f32,
    pub max_vx: f32,
    pub max_vy: f32,
    pub vy_boost: f32,
    pub hit_milestones: Vec<u32>,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_columns: usize,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub wall_top: f32,

    // === Session ===
    pub max_attempts: u32,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            border: BORDER,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,
            paddle_delay: PADDLE_DELAY,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_start_vy: BALL_START_VY,
            max_vx: MAX_VX,
            max_vy: MAX_VY,
            vy_boost: VY_BOOST,
            hit_milestones: HIT_MILESTONES.to_vec(),

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            wall_top: WALL_TOP,

            max_attempts: MAX_ATTEMPTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {path}: {e}");
                Self::default()
            }
        }
    }

    /// Check the geometry and speed invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.border < 0.0 {
            return invalid("border must not be negative");
        }
        if self.screen_width <= 2.0 * self.border || self.screen_height <= 2.0 * self.border {
            return invalid("screen must be larger than its borders");
        }
        if self.paddle_width <= 0.0 || self.paddle_width > self.screen_width {
            return invalid("paddle width must be in (0, screen_width]");
        }
        if self.paddle_y + self.paddle_height > self.screen_height {
            return invalid("paddle must sit inside the screen");
        }
        if self.ball_size <= 0.0 || self.ball_size >= self.screen_width - 2.0 * self.border {
            return invalid("ball size must fit between the borders");
        }
        if self.max_vx <= 0.0 || self.max_vy <= 0.0 {
            return invalid("velocity limits must be positive");
        }
        if self.paddle_speed <= 0.0 {
            return invalid("paddle speed must be positive");
        }
        if self.ball_speed < 0.0 {
            return invalid("ball speed must not be negative");
        }
        if self.ball_start_vy <= 0.0 {
            return invalid("serve must head downward");
        }
        if self.vy_boost < 0.0 {
            return invalid("vertical boost must not be negative");
        }
        if self.ball_speed > self.max_vx || self.ball_start_vy > self.max_vy {
            return invalid("launch speeds must not exceed velocity limits");
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return invalid("brick wall needs at least one row and column");
        }
        if self.brick_gap < 0.0 {
            return invalid("brick gap must not be negative");
        }
        if self.brick_width() <= 0.0 {
            return invalid("too many brick columns for the screen width");
        }
        Ok(())
    }

    /// Width of one brick, derived from the playfield width and column count
    pub fn brick_width(&self) -> f32 {
        let playfield = self.screen_width - 2.0 * self.border;
        playfield / self.brick_columns as f32 - self.brick_gap
    }

    /// Left edge of the playfield
    #[inline]
    pub fn left_bound(&self) -> f32 {
        self.border
    }

    /// Right edge of the playfield
    #[inline]
    pub fn right_bound(&self) -> f32 {
        self.screen_width - self.border
    }

    /// Top edge of the playfield
    #[inline]
    pub fn top_bound(&self) -> f32 {
        self.border
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "max_attempts": 5, "brick_rows": 4 }"#).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.brick_rows, 4);
        assert_eq!(config.screen_width, SCREEN_WIDTH);
        assert_eq!(config.hit_milestones, vec![4, 12]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_oversized_paddle_is_rejected() {
        let err = GameConfig::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    fn assert_rejected(json: &str) {
        match GameConfig::from_json(json) {
            Err(ConfigError::Invalid(_)) => {}
            other => panic!("{json} should be rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_ball_speed_is_rejected() {
        assert_rejected(r#"{ "ball_speed": -1.0 }"#);
    }

    #[test]
    fn test_non_positive_paddle_speed_is_rejected() {
        assert_rejected(r#"{ "paddle_speed": -8.0 }"#);
        assert_rejected(r#"{ "paddle_speed": 0.0 }"#);
    }

    #[test]
    fn test_upward_serve_is_rejected() {
        assert_rejected(r#"{ "ball_start_vy": -4.0 }"#);
        assert_rejected(r#"{ "ball_start_vy": 0.0 }"#);
    }

    #[test]
    fn test_negative_border_is_rejected() {
        assert_rejected(r#"{ "border": -5.0 }"#);
    }

    #[test]
    fn test_negative_brick_gap_is_rejected() {
        assert_rejected(r#"{ "brick_gap": -2.0 }"#);
    }

    #[test]
    fn test_negative_vy_boost_is_rejected() {
        assert_rejected(r#"{ "vy_boost": -1.0 }"#);
    }

    #[test]
    fn test_zero_ball_speed_serves_straight_down() {
        let config = GameConfig::from_json(r#"{ "ball_speed": 0.0 }"#).unwrap();
        let state = crate::sim::GameState::new(&config);
        assert_eq!(state.ball.vel.x, 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::from_file("/nonexistent/brick-breaker.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_brick_width_fills_playfield() {
        let config = GameConfig::default();
        let span = (config.brick_width() + config.brick_gap) * config.brick_columns as f32;
        assert!((span - (config.screen_width - 2.0 * config.border)).abs() < 0.001);
    }
}
