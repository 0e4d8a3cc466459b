//! Deterministic drop simulation module
//!
//! All drop-game logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod effects;
pub mod layout;
pub mod state;
pub mod tick;

pub use effects::advance_effects;
pub use layout::{layout_buckets, reshuffle};
pub use state::{Bucket, Candy, DropGame, Effect};
pub use tick::{commit_drop, tick};
