//! Sound cue capability
//!
//! The core never touches an audio backend. Settlement events emit cues
//! through an injected [`AudioCues`] implementation; the host maps them to
//! whatever mixer it runs. Cues are fire-and-forget: failures are the
//! implementation's problem and never surface back into the simulation.

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Candy released by the player
    Drop,
    /// Candy landed in a bucket
    Win,
    /// Candy fell past the bottom bound
    Loss,
    /// Bankruptcy recovery grant fired
    Bonus,
}

/// Capability consumed by the simulation and wheel resolver on settlement
pub trait AudioCues {
    fn play(&self, cue: SoundCue);
}

/// No-op sink for headless hosts and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioCues for NullAudio {
    fn play(&self, _cue: SoundCue) {}
}
