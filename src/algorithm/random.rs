//! Seeded random source shared by every stochastic step of generation

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// All randomness of one maze flows through a single selector, so equal
/// seeds reproduce the shuffle order, every walk step and the gate columns.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
    seed: u64,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a fresh seed from the operating system
    pub fn entropy_seed() -> u64 {
        rand::rng().random()
    }

    /// Seed this selector was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`, `None` when `len` is zero
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly chosen element of a slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        self.index(items.len())
            .and_then(|index| items.get(index).copied())
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
