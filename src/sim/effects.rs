//! Effect lifecycle manager
//!
//! Explosions and floating reward texts are owned by one collection and
//! advanced once per simulation tick. Explosions step their frame on a fixed
//! sub-interval accumulated from tick time; floating rewards fade and drift
//! every tick. Expired effects are dropped in the same pass.

use crate::consts::*;
use crate::sim::state::Effect;

/// Advance all effects by `dt` and remove the ones that expired.
pub fn advance_effects(effects: &mut Vec<Effect>, dt: f32) {
    for effect in effects.iter_mut() {
        match effect {
            Effect::Explosion { frame, timer, .. } => {
                *timer += dt;
                while *timer >= EXPLOSION_FRAME_INTERVAL {
                    *timer -= EXPLOSION_FRAME_INTERVAL;
                    *frame += 1;
                }
            }
            Effect::FloatingReward { opacity, dy, .. } => {
                *dy -= WIN_FLOAT_DRIFT * dt;
                *opacity -= WIN_FLOAT_DECAY * dt;
            }
        }
    }
    effects.retain(|e| match e {
        Effect::Explosion { frame, .. } => *frame <= EXPLOSION_LAST_FRAME,
        Effect::FloatingReward { opacity, .. } => *opacity > 0.0,
    });
}
