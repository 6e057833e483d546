//! Rendering collaborator
//!
//! The game composes each frame as a list of [`DrawCommand`]s and hands them
//! to a [`Renderer`]. Backends only need rectangles and text.

pub mod hud;
pub mod shapes;

use glam::Vec2;

use crate::sim::Rect;

pub use shapes::compose_frame;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_BLUE: Color = Color::rgb(36, 90, 190);
    pub const LIGHT_BLUE: Color = Color::rgb(0, 176, 240);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 100, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
}

/// A single drawing operation in screen space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    Text { pos: Vec2, text: String, color: Color },
}

/// Renderer collaborator
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);

    /// Show the finished frame
    fn present(&mut self);
}

/// Renderer that only counts and logs what it is asked to draw
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    commands: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        if let DrawCommand::Text { text, .. } = command {
            log::trace!("text: {text}");
        }
        self.commands += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("frame {} presented ({} commands)", self.frames, self.commands);
        self.commands = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::new();
        renderer.draw(&DrawCommand::Clear(Color::BLACK));
        renderer.present();
        renderer.present();
        assert_eq!(renderer.frames(), 2);
    }
}
