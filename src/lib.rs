//! Candy Drop - simulation and economy core for a casual drop game
//!
//! Core modules:
//! - `sim`: Deterministic drop simulation (physics, bucket scoring, effects)
//! - `economy`: Balance ledger with bet stepping and bankruptcy recovery
//! - `wheel`: Wheel-spin minigame resolver with cooldown gating
//! - `audio`: Sound cue capability consumed by settlement events
//! - `persistence`: Explicit load/save of the player profile
//!
//! The crate renders nothing and owns no timers: a host loop drives
//! `sim::tick` at a fixed rate, `wheel::WheelGame::tick` alongside it, and
//! reads all state as snapshots.

pub mod audio;
pub mod economy;
pub mod persistence;
pub mod sim;
pub mod wheel;

pub use audio::{AudioCues, NullAudio, SoundCue};
pub use economy::Ledger;
pub use wheel::WheelGame;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Downward acceleration on dropping candies (scene units/s²)
    pub const GRAVITY: f32 = 1100.0;
    /// Spawn height of the aimed candy
    pub const SPAWN_Y: f32 = 100.0;
    /// Horizontal margin added to the side inset for the aimed candy's bounds
    pub const AIM_BOUND_PAD: f32 = 36.0;
    /// Aimed candy horizontal speed range (units/s)
    pub const AIM_SPEED_MIN: f32 = 80.0;
    pub const AIM_SPEED_MAX: f32 = 160.0;
    /// Number of candy sprite variants
    pub const CANDY_SPRITES: u8 = 5;
    /// Candy collision radius
    pub const CANDY_RADIUS: f32 = 30.0;
    /// How far past the bottom edge a candy must fall to count as lost
    pub const FALL_OVERSHOOT: f32 = 60.0;
    /// Vertical offset above the bottom edge where loss explosions spawn
    pub const EXPLOSION_RAISE: f32 = 40.0;

    /// Number of scoring buckets in a layout
    pub const BUCKET_COUNT: usize = 8;
    /// Horizontal margin added to the side inset for bucket placement
    pub const BUCKET_SIDE_PAD: f32 = 12.0;
    /// Bucket mouth width clamp and spacing fraction
    pub const BUCKET_WIDTH_MIN: f32 = 72.0;
    pub const BUCKET_WIDTH_MAX: f32 = 110.0;
    pub const BUCKET_WIDTH_FRAC: f32 = 0.82;
    /// Bucket base height band as fractions of play height
    pub const BUCKET_HEIGHT_MIN_FRAC: f32 = 0.22;
    pub const BUCKET_HEIGHT_MAX_FRAC: f32 = 0.30;
    /// Height of the bucket head sprite; the mouth sits at its vertical center
    pub const BUCKET_HEAD_HEIGHT: f32 = 70.0;
    /// Vertical tolerance band around the bucket mouth for a hit
    pub const MOUTH_TOLERANCE: f32 = 28.0;
    /// Fraction of the candy radius kept away from each bucket edge
    pub const MOUTH_EDGE_INSET: f32 = CANDY_RADIUS * 0.3;
    /// Payout multiplier pool, shuffled and assigned across buckets
    pub const MULTIPLIER_POOL: [f64; 8] = [0.5, 1.0, 2.0, 1.5, 3.0, 0.5, 2.0, 1.0];
    /// Drops-between-reshuffles threshold range (inclusive)
    pub const SHUFFLE_DROPS_MIN: u32 = 10;
    pub const SHUFFLE_DROPS_MAX: u32 = 20;

    /// Explosion effect: frame cadence and terminal frame
    pub const EXPLOSION_FRAME_INTERVAL: f32 = 0.06;
    pub const EXPLOSION_LAST_FRAME: u32 = 8;
    /// Floating reward text: upward drift (units/s) and opacity decay (/s)
    pub const WIN_FLOAT_DRIFT: f32 = 40.0;
    pub const WIN_FLOAT_DECAY: f32 = 0.7;
}
