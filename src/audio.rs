//! Sound cue playback
//!
//! The simulation only names cues; whatever implements [`CuePlayer`] decides
//! how they sound. Playback is fire-and-forget.

pub use crate::sim::SoundCue;

/// Audio collaborator
pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Stable name for a cue, used as an asset key by audio backends
pub fn cue_name(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::PaddleHit => "paddle-hit",
        SoundCue::WallHit => "wall-hit",
        SoundCue::BrickBreak => "brick-break",
    }
}

/// Cue player that writes cues to the log instead of a sound device
pub struct LogCuePlayer {
    master_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for LogCuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogCuePlayer {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            played: 0,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Cues actually played (muted cues are not counted)
    pub fn played(&self) -> u64 {
        self.played
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }
}

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::trace!("cue {} at volume {vol:.2}", cue_name(cue));
    }
}
