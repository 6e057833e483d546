//! Input collaborator
//!
//! Whatever drives the game (keyboard, a script, the autopilot) implements
//! [`InputSource`] and is polled once per frame.

use std::collections::VecDeque;

use crate::sim::{GamePhase, GameState, TickInput};

/// Input snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Any key pressed this frame
    pub any_key: bool,
    /// Pause key pressed this frame
    pub pause: bool,
    /// Window close requested
    pub quit: bool,
}

impl From<&InputState> for TickInput {
    fn from(input: &InputState) -> Self {
        TickInput {
            left: input.left,
            right: input.right,
            start: input.any_key,
            pause: input.pause,
        }
    }
}

/// Input collaborator polled once per frame
pub trait InputSource {
    /// Called before `poll` with the state about to be advanced.
    /// Device-backed sources ignore it.
    fn observe(&mut self, _state: &GameState) {}

    fn poll(&mut self) -> InputState;
}

/// Replays a fixed sequence of frames, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputState>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputState>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.frames.pop_front().unwrap_or(InputState {
            quit: true,
            ..Default::default()
        })
    }
}

/// Plays by itself: starts games, chases the ball, and quits after a frame limit
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_frames: u64,
    frames: u64,
    /// Frames to idle in attract mode before pressing a key
    start_delay: u64,
    waited: u64,
    next: InputState,
}

impl Autopilot {
    pub fn new(max_frames: u64, start_delay: u64) -> Self {
        Self {
            max_frames,
            frames: 0,
            start_delay,
            waited: 0,
            next: InputState::default(),
        }
    }
}

impl InputSource for Autopilot {
    fn observe(&mut self, state: &GameState) {
        let mut next = InputState::default();

        match state.phase {
            GamePhase::WaitingToStart => {
                self.waited += 1;
                if self.waited >= self.start_delay {
                    next.any_key = true;
                    self.waited = 0;
                }
            }
            GamePhase::Playing => {
                let target = state.ball.rect.center().x;
                let paddle = state.paddle.rect.center().x;
                // Dead zone avoids jitter around the target
                let dead_zone = state.paddle.speed;
                next.left = target < paddle - dead_zone;
                next.right = target > paddle + dead_zone;
            }
            GamePhase::Paused => next.pause = true,
        }

        self.next = next;
    }

    fn poll(&mut self) -> InputState {
        self.frames += 1;
        if self.frames > self.max_frames {
            return InputState {
                quit: true,
                ..Default::default()
            };
        }
        self.next
    }
}
