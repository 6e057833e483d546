//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable row-major brick iteration
//! - No rendering, audio, or platform dependencies; side effects leave as `GameEvent`s

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;
pub mod wall;

pub use collision::paddle_offset;
pub use rect::Rect;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, SoundCue};
pub use tick::{TickInput, start_game, tick};
pub use wall::{Band, Brick, BrickWall, ROW_BANDS, band_for_row};
