//! Wheel-spin minigame resolver
//!
//! A spin picks a randomized target rotation up front; the visual easing is
//! presentation-only, so the outcome is fully determined at spin start. After
//! the fixed spin duration the rotation is snapped onto a sector boundary and
//! the sector's reward is applied after a short suspense pause. A persisted
//! 12-hour cooldown gates repeat spins unless the miss sector comes up.
//!
//! Sector numbering runs opposite the raw index because the wheel art's zero
//! is opposite the pointer. The reversal formula is a black-box contract:
//! changing it silently changes reward outcomes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioCues, SoundCue};
use crate::economy::Ledger;

/// Number of equal angular sectors on the wheel
pub const SEGMENT_COUNT: u32 = 12;
/// Angular size of one sector in degrees
pub const SECTOR_ANGLE: f64 = 360.0 / SEGMENT_COUNT as f64;
/// Sector that pays nothing and arms no cooldown
pub const MISS_SECTOR: u32 = 11;
/// Visual spin duration in seconds
pub const SPIN_DURATION: f32 = 3.0;
/// Suspense pause range before the reward lands (seconds)
pub const SETTLE_DELAY_MIN: f32 = 1.0;
pub const SETTLE_DELAY_MAX: f32 = 2.0;
/// Full-turn count range for a spin target
pub const SPIN_TURNS_MIN: u32 = 6;
pub const SPIN_TURNS_MAX: u32 = 10;
/// Cooldown armed after a non-miss spin (seconds)
pub const COOLDOWN_SECS: f64 = 12.0 * 60.0 * 60.0;

/// Reward paid for a 1-based sector number
pub fn reward_for_sector(sector: u32) -> i64 {
    match sector {
        1 => 100,
        2 => 200,
        3 => 50,
        4 => 100,
        5 => 75,
        6 => 200,
        7 => 50,
        8 => 100,
        9 => 75,
        10 => 200,
        11 => 0,
        12 => 75,
        _ => 0,
    }
}

/// Normalize an angle in degrees into [0, 360)
pub fn normalized_angle(a: f64) -> f64 {
    let mut v = a % 360.0;
    if v < 0.0 {
        v += 360.0;
    }
    v
}

/// Map a (snapped) rotation angle to its 1-based sector number.
pub fn sector_from_rotation(rotation: f64) -> u32 {
    let a = normalized_angle(rotation);
    let raw_index = ((a / SECTOR_ANGLE).round() as u32) % SEGMENT_COUNT;
    (SEGMENT_COUNT - raw_index) % SEGMENT_COUNT + 1
}

/// Bonus-ad capability consumed by the double-reward offer.
///
/// `show` returns true only for a fully watched reward; at most one
/// completion per call.
pub trait RewardedAds {
    fn is_ready(&self) -> bool;
    fn show(&mut self) -> bool;
}

/// Stand-in for hosts without an ad network: never ready.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAds;

impl RewardedAds for NoAds {
    fn is_ready(&self) -> bool {
        false
    }

    fn show(&mut self) -> bool {
        false
    }
}

/// Resolver phase. `Spinning` and `Settling` carry their remaining time so
/// the host tick drives both one-shot delays without owning timers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WheelPhase {
    Idle,
    Spinning {
        remaining: f32,
    },
    Settling {
        remaining: f32,
        sector: u32,
        reward: i64,
    },
}

/// Wheel minigame state
#[derive(Debug, Clone)]
pub struct WheelGame {
    /// Accumulated rotation in degrees; normalized only for sector resolution
    pub rotation: f64,
    pub phase: WheelPhase,
    /// Epoch seconds when the cooldown ends; 0 = no cooldown (persisted)
    pub cooldown_end: f64,
    /// Reward applied by the most recent spin
    pub last_reward: i64,
    /// Whether the double-reward offer is currently surfaced
    pub double_offer: bool,
    rng: Pcg32,
}

impl WheelGame {
    pub fn new(seed: u64, cooldown_end: f64) -> Self {
        Self {
            rotation: 0.0,
            phase: WheelPhase::Idle,
            cooldown_end,
            last_reward: 0,
            double_offer: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_spinning(&self) -> bool {
        !matches!(self.phase, WheelPhase::Idle)
    }

    /// Whether the cooldown gate is closed at the given wall-clock time
    pub fn cooldown_active(&self, now: f64) -> bool {
        self.cooldown_end > 0.0 && now < self.cooldown_end
    }

    /// Derived read for the countdown display; recomputed on demand
    pub fn cooldown_remaining(&self, now: f64) -> f64 {
        (self.cooldown_end - now).max(0.0)
    }

    /// Start a spin. Silent no-op while spinning/settling or cooled down.
    ///
    /// The rotation field jumps straight to the target; the presentation
    /// layer animates toward it over [`SPIN_DURATION`].
    pub fn spin(&mut self, now: f64) {
        if self.is_spinning() || self.cooldown_active(now) {
            return;
        }
        self.double_offer = false;

        let extra = self.rng.random_range(0..360) as f64;
        let turns = self.rng.random_range(SPIN_TURNS_MIN..=SPIN_TURNS_MAX) as f64 * 360.0;
        self.rotation += turns + extra;
        self.phase = WheelPhase::Spinning {
            remaining: SPIN_DURATION,
        };
        log::debug!("wheel spin started, target rotation {:.1}", self.rotation);
    }

    /// Advance the resolver's phase timers.
    ///
    /// `now` is wall-clock epoch seconds, used only to arm the cooldown at
    /// settlement. Runs on the host's serialized context alongside the drop
    /// simulation.
    pub fn tick(
        &mut self,
        dt: f32,
        now: f64,
        ledger: &mut Ledger,
        ads: &dyn RewardedAds,
        audio: &dyn AudioCues,
    ) {
        match self.phase {
            WheelPhase::Idle => {}
            WheelPhase::Spinning { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = WheelPhase::Spinning { remaining };
                    return;
                }

                // Snap the rotation onto the nearest sector boundary
                let a = normalized_angle(self.rotation);
                let raw_index = ((a / SECTOR_ANGLE).round() as u32) % SEGMENT_COUNT;
                let snapped = raw_index as f64 * SECTOR_ANGLE;
                self.rotation += snapped - a;

                let sector = sector_from_rotation(self.rotation);
                let reward = reward_for_sector(sector);
                self.phase = WheelPhase::Settling {
                    remaining: self.rng.random_range(SETTLE_DELAY_MIN..=SETTLE_DELAY_MAX),
                    sector,
                    reward,
                };
            }
            WheelPhase::Settling {
                remaining,
                sector,
                reward,
            } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = WheelPhase::Settling {
                        remaining,
                        sector,
                        reward,
                    };
                    return;
                }

                self.last_reward = reward;
                if reward > 0 {
                    ledger.settle(reward);
                    audio.play(SoundCue::Win);
                }
                log::info!("wheel settled: sector {sector}, reward {reward}");

                if sector != MISS_SECTOR {
                    self.cooldown_end = now + COOLDOWN_SECS;
                    self.double_offer = reward > 0 && ads.is_ready();
                } else {
                    self.double_offer = false;
                }
                self.phase = WheelPhase::Idle;
            }
        }
    }

    /// Accept the double-reward offer.
    ///
    /// A not-ready ad network rejects synchronously back to the no-offer
    /// state; a fully watched reward doubles the already-applied reward once.
    pub fn accept_double_offer(&mut self, ledger: &mut Ledger, ads: &mut dyn RewardedAds) {
        if !self.double_offer {
            return;
        }
        self.double_offer = false;
        if !ads.is_ready() {
            return;
        }
        if ads.show() && self.last_reward > 0 {
            ledger.settle(self.last_reward);
        }
    }

    /// Decline the double-reward offer
    pub fn dismiss_double_offer(&mut self) {
        self.double_offer = false;
    }
}
