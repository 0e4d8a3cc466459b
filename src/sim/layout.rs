//! Target layout manager
//!
//! Owns bucket placement: evenly spaced centers across the usable span,
//! widths proportional to spacing, randomized base heights, and multipliers
//! assigned from a shuffled pool. Reshuffles permute positions and
//! multipliers across the existing buckets without relayout.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::sim::state::{Bucket, DropGame};

/// Compute a fresh bucket row for the game's current play size.
///
/// Called once at initialization and whenever the play area is resized.
pub fn layout_buckets(game: &mut DropGame) {
    let side_pad = game.side_inset + BUCKET_SIDE_PAD;
    let usable = (game.play_size.x - side_pad * 2.0).max(1.0);
    let step = usable / (BUCKET_COUNT as f32 - 1.0);

    let width = (step * BUCKET_WIDTH_FRAC).clamp(BUCKET_WIDTH_MIN, BUCKET_WIDTH_MAX);
    let min_h = game.play_size.y * BUCKET_HEIGHT_MIN_FRAC;
    let max_h = game.play_size.y * BUCKET_HEIGHT_MAX_FRAC;

    let mut multipliers = MULTIPLIER_POOL;
    multipliers.shuffle(&mut game.rng);

    let mut buckets = Vec::with_capacity(BUCKET_COUNT);
    for i in 0..BUCKET_COUNT {
        let id = game.next_entity_id();
        let base_height = game.rng.random_range(min_h..=max_h);
        buckets.push(Bucket {
            id,
            x: side_pad + i as f32 * step,
            multiplier: multipliers[i % multipliers.len()],
            width,
            base_height,
        });
    }
    game.buckets = buckets;
}

/// Independently shuffle the x-positions and the multipliers of the existing
/// buckets and reassign them pairwise. Widths and heights are untouched, so
/// the layout churns without relayout cost.
pub fn reshuffle(buckets: &mut [Bucket], rng: &mut Pcg32) {
    let mut xs: Vec<f32> = buckets.iter().map(|b| b.x).collect();
    let mut mults: Vec<f64> = buckets.iter().map(|b| b.multiplier).collect();
    xs.shuffle(rng);
    mults.shuffle(rng);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.x = xs[i];
        bucket.multiplier = mults[i];
    }
}
