//! Draw command generation for each entity

use glam::Vec2;

use super::hud::{format_attempts, format_score};
use super::{Color, DrawCommand};
use crate::config::GameConfig;
use crate::sim::{Ball, BrickWall, GamePhase, GameState, Paddle, Rect};

pub const BACKGROUND: Color = Color::DARK_BLUE;
const BORDER_COLOR: Color = Color::WHITE;
const BRICK_STROKE: f32 = 1.0;

/// Fill color for a live brick of the given strength
pub fn brick_color(strength: u8) -> Color {
    match strength {
        4.. => Color::RED,
        3 => Color::ORANGE,
        2 => Color::GREEN,
        _ => Color::YELLOW,
    }
}

/// Bricks: live ones filled by strength and outlined, destroyed ones as background
pub fn wall(wall: &BrickWall, out: &mut Vec<DrawCommand>) {
    for (_, _, brick) in wall.iter() {
        if brick.is_live() {
            out.push(DrawCommand::FillRect {
                rect: brick.rect,
                color: brick_color(brick.strength),
            });
            out.push(DrawCommand::StrokeRect {
                rect: brick.rect,
                color: BACKGROUND,
                width: BRICK_STROKE,
            });
        } else {
            out.push(DrawCommand::FillRect {
                rect: brick.rect,
                color: BACKGROUND,
            });
        }
    }
}

pub fn paddle(paddle: &Paddle, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::FillRect {
        rect: paddle.rect,
        color: Color::LIGHT_BLUE,
    });
}

pub fn ball(ball: &Ball, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::FillRect {
        rect: ball.rect,
        color: Color::WHITE,
    });
}

/// Left, right, and top borders the ball bounces off
pub fn borders(config: &GameConfig, out: &mut Vec<DrawCommand>) {
    let b = config.border;
    let (w, h) = (config.screen_width, config.screen_height);
    for rect in [
        Rect::new(0.0, 0.0, w, b),
        Rect::new(0.0, 0.0, b, h),
        Rect::new(w - b, 0.0, b, h),
    ] {
        out.push(DrawCommand::FillRect {
            rect,
            color: BORDER_COLOR,
        });
    }
}

/// Score and attempts along the top, plus the start prompt in attract mode
pub fn hud(state: &GameState, config: &GameConfig, out: &mut Vec<DrawCommand>) {
    let y = config.border + 10.0;
    out.push(DrawCommand::Text {
        pos: Vec2::new(config.border + 10.0, y),
        text: format!("Score: {}", format_score(state.score())),
        color: Color::WHITE,
    });
    out.push(DrawCommand::Text {
        pos: Vec2::new(config.screen_width - config.border - 120.0, y),
        text: format!("Attempt: {}", format_attempts(state.attempts_used)),
        color: Color::WHITE,
    });

    if state.phase == GamePhase::WaitingToStart {
        out.push(DrawCommand::Text {
            pos: Vec2::new(config.screen_width / 2.0 - 90.0, config.screen_height / 2.0),
            text: "PRESS ANY KEY".to_string(),
            color: Color::WHITE,
        });
    } else if state.phase == GamePhase::Paused {
        out.push(DrawCommand::Text {
            pos: Vec2::new(config.screen_width / 2.0 - 50.0, config.screen_height / 2.0),
            text: "PAUSED".to_string(),
            color: Color::WHITE,
        });
    }
}

/// Every draw command for one frame, back to front
pub fn compose_frame(state: &GameState, config: &GameConfig) -> Vec<DrawCommand> {
    let mut out = Vec::with_capacity(2 * state.wall.rows() * state.wall.columns() + 16);
    out.push(DrawCommand::Clear(BACKGROUND));
    borders(config, &mut out);
    wall(&state.wall, &mut out);
    paddle(&state.paddle, &mut out);
    ball(&state.ball, &mut out);
    hud(state, config, &mut out);
    out
}
