//! Ball movement and collision response
//!
//! Every contact is an axis-aligned overlap test followed by a velocity
//! rewrite. Side effects (sounds, score) are pushed as `GameEvent`s.

use super::rect::Rect;
use super::state::{Ball, GameEvent, Paddle, SoundCue};
use super::wall::BrickWall;
use crate::config::GameConfig;

/// Where the ball's center struck the paddle: -1 at the left edge, 0 at the
/// center, +1 at the right edge. Clamped for balls overhanging an edge.
pub fn paddle_offset(ball_center_x: f32, paddle: &Rect) -> f32 {
    if paddle.width() <= 0.0 {
        return 0.0;
    }
    let t = (ball_center_x - paddle.left()) / paddle.width();
    ((t - 0.5) * 2.0).clamp(-1.0, 1.0)
}

impl Ball {
    /// Advance one tick and bounce off the side and top borders
    ///
    /// The ball is pushed back onto the border it crossed and its velocity is
    /// pointed away from that border, so it can neither tunnel nor stick.
    pub fn advance(&mut self, menu: bool, config: &GameConfig, events: &mut Vec<GameEvent>) {
        self.rect.pos += self.vel;
        self.ticks_since_hit = self.ticks_since_hit.saturating_add(1);

        let mut hit_wall = false;

        if self.rect.left() <= config.left_bound() && self.vel.x < 0.0 {
            self.rect.pos.x = config.left_bound();
            self.vel.x = -self.vel.x;
            hit_wall = true;
        } else if self.rect.right() >= config.right_bound() && self.vel.x > 0.0 {
            self.rect.pos.x = config.right_bound() - self.rect.width();
            self.vel.x = -self.vel.x;
            hit_wall = true;
        }

        if self.rect.top() <= config.top_bound() && self.vel.y < 0.0 {
            self.rect.pos.y = config.top_bound();
            self.vel.y = -self.vel.y;
            self.can_hit_brick = true;
            hit_wall = true;
        }

        if hit_wall {
            log::trace!("Wall bounce at {:?}", self.rect.pos);
            if !menu {
                events.push(GameEvent::Sound(SoundCue::WallHit));
            }
        }
    }

    /// Bounce off the paddle, steering by where the ball struck it
    pub fn collide_with_paddle(
        &mut self,
        paddle: &Paddle,
        menu: bool,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) {
        if !self.rect.overlaps(&paddle.rect) {
            return;
        }

        let offset = paddle_offset(self.rect.center().x, &paddle.rect);
        let mut speed_y = self.vel.y.abs();

        if !menu && self.ticks_since_hit >= config.paddle_delay {
            self.hit_count += 1;
            self.ticks_since_hit = 0;
            events.push(GameEvent::Sound(SoundCue::PaddleHit));

            if config.hit_milestones.contains(&self.hit_count) {
                speed_y += config.vy_boost;
                log::debug!("Hit milestone {}: vertical speed now {speed_y}", self.hit_count);
            }
        }

        if !menu {
            self.vel.x += offset * config.max_vx;
        }
        self.vel.y = speed_y;
        self.clamp_velocity(config);
        // Always leave upward
        self.vel.y = -self.vel.y.abs();
        self.can_hit_brick = true;

        self.rect.pos.y = paddle.rect.top() - self.rect.height();
    }

    /// Resolve at most one brick hit this tick
    ///
    /// Returns the (row, col) of the brick that was hit, if any.
    pub fn collide_with_bricks(
        &mut self,
        wall: &mut BrickWall,
        menu: bool,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Option<(usize, usize)> {
        if !self.can_hit_brick {
            return None;
        }
        let (row, col) = wall.first_overlap(&self.rect)?;
        let brick = wall.brick_mut(row, col)?;

        // Strength 3 and 4 always take the absolute set, regardless of current speed
        if brick.strength >= 3 {
            self.vel.y = -config.max_vy;
        } else {
            self.vel.y = -self.vel.y;
        }
        self.clamp_velocity(config);

        if !menu {
            let points = brick.value;
            brick.strength = 0;
            self.score += points;
            events.push(GameEvent::Sound(SoundCue::BrickBreak));
            events.push(GameEvent::Scored { points, row, col });
            log::debug!("Brick ({row}, {col}) destroyed for {points} points, score {}", self.score);
        }

        self.rect.pos.y += self.vel.y;
        self.can_hit_brick = false;
        Some((row, col))
    }
}
