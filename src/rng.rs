use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// All gameplay randomness flows through one `Dice` so a fixed seed
/// replays the exact same world.
pub struct Dice {
    rng: SmallRng,
}

impl Dice {
    pub fn from_entropy() -> Self {
        Dice { rng: SmallRng::from_entropy() }
    }

    pub fn from_seed_u64(seed: u64) -> Self {
        Dice { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Uniform roll in `1..=sides`. A zero-sided die is a programming
    /// error and panics.
    pub fn roll(&mut self, sides: u32) -> u32 {
        assert!(sides >= 1, "die must have at least one side");
        self.rng.gen_range(1..=sides)
    }

    pub fn flip_is_heads(&mut self) -> bool {
        self.roll(2) == 2
    }

    /// Percentage chance out of 100.
    ///
    ///   chance(50)  // 50% likely to be true
    ///   chance(10)  // 10% likely to be true
    ///
    /// Out-of-range percentages are clamped, so `chance(0)` is never true
    /// and `chance(100)` always is.
    pub fn chance(&mut self, percent: i32) -> bool {
        self.roll(100) as i32 <= percent.clamp(0, 100)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::from_entropy()
    }
}
