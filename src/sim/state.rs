//! Drop-game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::layout;

/// A candy entity: either the single aimed candy oscillating at the top of
/// the play area, or one of the dropping candies falling under gravity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candy {
    pub id: u32,
    /// Sprite variant selector (0..CANDY_SPRITES), meaningful only to the host
    pub sprite: u8,
    pub pos: Vec2,
    pub vel: Vec2,
    /// False while aimed, true once released
    pub dropping: bool,
    pub alive: bool,
}

/// A scoring bucket: horizontal center, payout multiplier, mouth width, and
/// the height of its base above the bottom edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    pub id: u32,
    pub x: f32,
    pub multiplier: f64,
    pub width: f32,
    pub base_height: f32,
}

impl Bucket {
    /// Vertical center of the bucket mouth, measured from the top of a play
    /// area of the given height.
    pub fn mouth_y(&self, play_height: f32) -> f32 {
        play_height - self.base_height - BUCKET_HEAD_HEIGHT / 2.0
    }
}

/// Transient visual event, owned exclusively by the effect list and advanced
/// once per tick (no per-effect timers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Effect {
    /// Frame-stepped explosion at a fixed position
    Explosion {
        pos: Vec2,
        /// Current animation frame, 1-based
        frame: u32,
        /// Time accumulated toward the next frame step
        #[serde(skip)]
        timer: f32,
    },
    /// Reward text floating upward while fading out
    FloatingReward {
        pos: Vec2,
        text: String,
        opacity: f32,
        /// Accumulated vertical drift (negative = upward)
        dy: f32,
    },
}

/// Complete drop-game state (deterministic for a given seed and input order)
#[derive(Debug, Clone)]
pub struct DropGame {
    /// Play area size in scene units
    pub play_size: Vec2,
    /// Symmetric horizontal safe-area inset
    pub side_inset: f32,
    /// The single candy currently oscillating, awaiting release
    pub aimed: Option<Candy>,
    /// Released candies pending resolution (stable id order)
    pub dropping: Vec<Candy>,
    /// Scoring buckets, mutated only by layout/reshuffle
    pub buckets: Vec<Bucket>,
    /// Live visual effects
    pub effects: Vec<Effect>,
    /// Drops since the last reshuffle
    pub drops_since_shuffle: u32,
    /// Randomized drop count that triggers the next reshuffle
    pub shuffle_threshold: u32,
    /// Seeded RNG; the single source of randomness for this component
    pub rng: Pcg32,
    next_id: u32,
}

impl DropGame {
    /// Create a fully initialized game: buckets laid out, aimed candy spawned.
    pub fn new(seed: u64, play_size: Vec2, side_inset: f32) -> Self {
        let mut game = Self {
            play_size,
            side_inset,
            aimed: None,
            dropping: Vec::new(),
            buckets: Vec::new(),
            effects: Vec::new(),
            drops_since_shuffle: 0,
            shuffle_threshold: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        game.shuffle_threshold = game.draw_shuffle_threshold();
        layout::layout_buckets(&mut game);
        game.spawn_aimed_candy();
        game
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Horizontal bounds the aimed candy oscillates within
    pub fn aim_bounds(&self) -> (f32, f32) {
        let pad = self.side_inset + AIM_BOUND_PAD;
        (pad, pad.max(self.play_size.x - pad))
    }

    /// Spawn a fresh aimed candy at a random position, speed and direction.
    ///
    /// Called at init and immediately after each release, so exactly one
    /// aimed candy exists outside the body of `commit_drop`.
    pub fn spawn_aimed_candy(&mut self) {
        let (min_x, max_x) = self.aim_bounds();
        let id = self.next_entity_id();
        let sprite = self.rng.random_range(0..CANDY_SPRITES);
        let x = self.rng.random_range(min_x..=max_x);
        let speed = self.rng.random_range(AIM_SPEED_MIN..=AIM_SPEED_MAX);
        let dir = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.aimed = Some(Candy {
            id,
            sprite,
            pos: Vec2::new(x, SPAWN_Y),
            vel: Vec2::new(dir * speed, 0.0),
            dropping: false,
            alive: true,
        });
    }

    /// Relayout buckets for a new play size (host calls this on resize).
    /// In-flight candies and effects are left alone.
    pub fn set_play_size(&mut self, play_size: Vec2) {
        self.play_size = play_size;
        layout::layout_buckets(self);
    }

    /// Draw the next randomized reshuffle threshold
    pub fn draw_shuffle_threshold(&mut self) -> u32 {
        self.rng.random_range(SHUFFLE_DROPS_MIN..=SHUFFLE_DROPS_MAX)
    }

    /// Reshuffle bucket positions and multipliers once the drop counter
    /// reaches the threshold, then reset the counter and redraw it.
    pub fn maybe_reshuffle(&mut self) {
        if self.drops_since_shuffle < self.shuffle_threshold {
            return;
        }
        self.drops_since_shuffle = 0;
        self.shuffle_threshold = self.draw_shuffle_threshold();
        layout::reshuffle(&mut self.buckets, &mut self.rng);
        log::debug!("buckets reshuffled, next threshold {}", self.shuffle_threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_initialized() {
        let game = DropGame::new(7, Vec2::new(400.0, 800.0), 0.0);
        assert_eq!(game.buckets.len(), BUCKET_COUNT);
        assert!(game.dropping.is_empty());

        let candy = game.aimed.as_ref().unwrap();
        assert!(!candy.dropping);
        assert!(candy.alive);
        assert_eq!(candy.vel.y, 0.0);
        assert_eq!(candy.pos.y, SPAWN_Y);

        let (min_x, max_x) = game.aim_bounds();
        assert!(candy.pos.x >= min_x && candy.pos.x <= max_x);
        assert!(candy.vel.x.abs() >= AIM_SPEED_MIN && candy.vel.x.abs() <= AIM_SPEED_MAX);
        assert!((SHUFFLE_DROPS_MIN..=SHUFFLE_DROPS_MAX).contains(&game.shuffle_threshold));
    }

    #[test]
    fn test_same_seed_same_spawn() {
        let a = DropGame::new(42, Vec2::new(400.0, 800.0), 0.0);
        let b = DropGame::new(42, Vec2::new(400.0, 800.0), 0.0);
        let (ca, cb) = (a.aimed.unwrap(), b.aimed.unwrap());
        assert_eq!(ca.pos, cb.pos);
        assert_eq!(ca.vel, cb.vel);
        assert_eq!(ca.sprite, cb.sprite);
    }

    #[test]
    fn test_mouth_y() {
        let bucket = Bucket {
            id: 1,
            x: 100.0,
            multiplier: 1.0,
            width: 80.0,
            base_height: 200.0,
        };
        assert_eq!(bucket.mouth_y(800.0), 800.0 - 200.0 - BUCKET_HEAD_HEIGHT / 2.0);
    }

    #[test]
    fn test_narrow_play_area_bounds_collapse() {
        // Width smaller than twice the pad: bounds collapse to a single point
        let game = DropGame::new(1, Vec2::new(40.0, 800.0), 0.0);
        let (min_x, max_x) = game.aim_bounds();
        assert_eq!(min_x, max_x);
    }
}
