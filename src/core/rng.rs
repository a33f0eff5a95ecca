//! Deterministic random number generation.
//!
//! Every randomized choice the engine makes (judge selection, monster
//! sampling, deck shuffling, starting player, join keys) goes through
//! [`GameRng`] so a session seeded with a fixed value replays identically.
//! Production sessions seed from OS entropy via [`GameRng::from_entropy`].

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing a game session.
///
/// Uses ChaCha8 for speed with unbiased uniform output. The seed is retained
/// so a session can report how to reproduce itself.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample `count` distinct indices from `0..population` uniformly,
    /// without replacement.
    ///
    /// Partial Fisher-Yates over an index vector: the population itself is
    /// never touched, so immutable catalogs can be sampled directly.
    /// `count` is clamped to the population size.
    #[must_use]
    pub fn sample_indices(&mut self, population: usize, count: usize) -> Vec<usize> {
        let count = count.min(population);
        let mut indices: Vec<usize> = (0..population).collect();

        for i in 0..count {
            let j = self.inner.gen_range(i..population);
            indices.swap(i, j);
        }

        indices.truncate(count);
        indices
    }

    /// Generate a random alphanumeric string of the given length.
    ///
    /// Used for session join keys.
    #[must_use]
    pub fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.inner)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
