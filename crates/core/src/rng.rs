//! RNG module - injected, seedable randomness
//!
//! The engine never reaches for a global RNG. Everything that needs randomness takes
//! a generator implementing [`rand::RngCore`], so tests and replays can pin a seed
//! and production can plug in any `rand` generator.
//!
//! [`SimpleRng`] is the default: a small LCG that is fully deterministic across
//! platforms and `rand` releases.

use rand::{Error, Rng, RngCore, SeedableRng};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state; `SimpleRng::new(rng.state())` resumes the sequence
    pub fn state(&self) -> u32 {
        self.state
    }

    fn step(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SimpleRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Shuffle a slice in place using Fisher-Yates
///
/// Walks from the back, swapping each element with a uniformly chosen element at or
/// before it.
pub fn shuffle<T, R: RngCore + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// Roll a `percent` chance (0..=100); values above 100 always succeed
pub fn roll_chance<R: RngCore + ?Sized>(rng: &mut R, percent: u32) -> bool {
    rng.gen_range(0..100) < percent
}
