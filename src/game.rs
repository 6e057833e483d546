//! Frame loop driver
//!
//! Owns the simulation state and its three collaborators. Each frame:
//! poll input, tick, apply events, draw, present, wait for the next frame.

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::CuePlayer;
use crate::config::GameConfig;
use crate::platform::InputSource;
use crate::renderer::{Renderer, compose_frame};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    /// Window close requested
    Exit,
}

/// Sleeps out the remainder of each frame to hold a fixed frame rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        let frame = Duration::from_secs(1) / frame_rate.max(1);
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    /// Block until the current frame's deadline
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            // Running behind: don't try to catch up
            self.next = now + self.frame;
        }
    }
}

/// Running totals of what the game has done, for the exit summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    pub frames: u64,
    pub games_started: u32,
    pub games_finished: u32,
    pub best_score: u32,
    pub bricks_destroyed: u32,
}

/// The game loop and everything it owns
pub struct Game<'a, I, R, A> {
    config: &'a GameConfig,
    state: GameState,
    input: I,
    renderer: R,
    audio: A,
    stats: GameStats,
}

impl<'a, I, R, A> Game<'a, I, R, A>
where
    I: InputSource,
    R: Renderer,
    A: CuePlayer,
{
    pub fn new(config: &'a GameConfig, input: I, renderer: R, audio: A) -> Self {
        Self {
            config,
            state: GameState::new(config),
            input,
            renderer,
            audio,
            stats: GameStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Run one frame without waiting
    pub fn frame(&mut self) -> FrameControl {
        self.input.observe(&self.state);
        let input = self.input.poll();
        if input.quit {
            log::info!("Window closed");
            return FrameControl::Exit;
        }

        let events = tick(&mut self.state, &TickInput::from(&input), self.config);
        for event in &events {
            self.apply(event);
        }

        for command in &compose_frame(&self.state, self.config) {
            self.renderer.draw(command);
        }
        self.renderer.present();
        self.stats.frames += 1;

        FrameControl::Continue
    }

    /// Run frames at the configured rate until the input asks to quit
    pub fn run(&mut self, frame_rate: u32) -> &GameStats {
        let mut limiter = FrameLimiter::new(frame_rate);
        while self.frame() == FrameControl::Continue {
            limiter.wait();
        }
        &self.stats
    }

    fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Sound(cue) => self.audio.play(cue),
            GameEvent::Scored { .. } => self.stats.bricks_destroyed += 1,
            GameEvent::GameStarted => self.stats.games_started += 1,
            GameEvent::GameOver { score } => {
                self.stats.games_finished += 1;
                self.stats.best_score = self.stats.best_score.max(score);
            }
            _ => {}
        }
    }
}
