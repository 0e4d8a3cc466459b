//! Fixed timestep drop simulation
//!
//! Advances the aimed candy and all in-flight candies, resolves each dropping
//! candy against the bucket row, and settles wins/losses on the ledger.

use glam::Vec2;

use crate::audio::{AudioCues, SoundCue};
use crate::consts::*;
use crate::economy::Ledger;
use crate::sim::effects::advance_effects;
use crate::sim::state::{Bucket, DropGame, Effect};

/// Advance the game by one timestep.
///
/// Integration first, then resolution (hit test before fall-through, once per
/// candy per tick), then batch removal, then effect and bonus-flash decay.
pub fn tick(game: &mut DropGame, ledger: &mut Ledger, audio: &dyn AudioCues, dt: f32) {
    // Aimed candy: bounded horizontal motion with elastic reflection
    let (min_x, max_x) = game.aim_bounds();
    if let Some(candy) = game.aimed.as_mut() {
        candy.pos.x += candy.vel.x * dt;
        if candy.pos.x < min_x {
            candy.pos.x = min_x;
            candy.vel.x = candy.vel.x.abs();
        }
        if candy.pos.x > max_x {
            candy.pos.x = max_x;
            candy.vel.x = -candy.vel.x.abs();
        }
    }

    // Dropping candies: constant gravity, no horizontal force
    for candy in &mut game.dropping {
        candy.vel.y += GRAVITY * dt;
        candy.pos.y += candy.vel.y * dt;
    }

    resolve_drops(game, ledger, audio);

    advance_effects(&mut game.effects, dt);
    ledger.tick(dt);
}

/// Release the aimed candy and spawn its successor.
///
/// No-op when the balance does not cover the current bet or no aimed candy is
/// available. Increments the drop counter and runs the reshuffle check.
pub fn commit_drop(game: &mut DropGame, ledger: &mut Ledger, audio: &dyn AudioCues) {
    if !ledger.can_afford() {
        return;
    }
    let Some(candy) = game.aimed.take() else {
        return;
    };
    if !candy.alive || candy.dropping {
        game.aimed = Some(candy);
        return;
    }

    let mut candy = candy;
    candy.dropping = true;
    candy.vel = Vec2::ZERO;
    game.dropping.push(candy);
    game.spawn_aimed_candy();

    game.drops_since_shuffle += 1;
    game.maybe_reshuffle();
    audio.play(SoundCue::Drop);
}

/// Find the first bucket whose mouth band contains the candy position.
///
/// Returns the bucket index and the mouth's vertical center. The horizontal
/// test is inset from both edges so grazing shots don't count.
pub fn bucket_hit(buckets: &[Bucket], play_height: f32, pos: Vec2) -> Option<(usize, f32)> {
    for (i, bucket) in buckets.iter().enumerate() {
        let mouth_y = bucket.mouth_y(play_height);
        if (pos.y - mouth_y).abs() >= MOUTH_TOLERANCE {
            continue;
        }
        let half = bucket.width * 0.5;
        let inside_x =
            pos.x > bucket.x - half + MOUTH_EDGE_INSET && pos.x < bucket.x + half - MOUTH_EDGE_INSET;
        if inside_x {
            return Some((i, mouth_y));
        }
    }
    None
}

/// Evaluate terminal conditions for every dropping candy and settle results.
/// Resolved candies are removed in one batch after the loop.
fn resolve_drops(game: &mut DropGame, ledger: &mut Ledger, audio: &dyn AudioCues) {
    let play_h = game.play_size.y;
    let mut to_remove: Vec<u32> = Vec::new();

    for candy in &game.dropping {
        if let Some((idx, mouth_y)) = bucket_hit(&game.buckets, play_h, candy.pos) {
            let bucket = &game.buckets[idx];
            let bet = ledger.bet();
            let payout = (bet as f64 * bucket.multiplier).floor() as i64;
            ledger.last_win = payout;
            let recovered = ledger.settle(payout - bet);

            game.effects.push(Effect::FloatingReward {
                pos: Vec2::new(bucket.x, mouth_y + 10.0),
                text: format!("+{payout}"),
                opacity: 1.0,
                dy: 0.0,
            });
            audio.play(SoundCue::Win);
            if recovered {
                audio.play(SoundCue::Bonus);
            }
            to_remove.push(candy.id);
            continue;
        }

        if candy.pos.y > play_h + FALL_OVERSHOOT {
            let recovered = ledger.settle(-ledger.bet());

            game.effects.push(Effect::Explosion {
                pos: Vec2::new(candy.pos.x, play_h - EXPLOSION_RAISE),
                frame: 1,
                timer: 0.0,
            });
            audio.play(SoundCue::Loss);
            if recovered {
                audio.play(SoundCue::Bonus);
            }
            to_remove.push(candy.id);
        }
    }

    if !to_remove.is_empty() {
        game.dropping.retain(|c| !to_remove.contains(&c.id));
    }
}
