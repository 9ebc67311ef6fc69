//! Per-match random number generation.
//!
//! ## Key Features
//!
//! - **Independent**: every match owns its own stream, no state is shared
//!   between concurrently running matches
//! - **Entropy-seeded**: `GameRng::from_entropy()` draws a fresh seed from the
//!   OS-seeded thread RNG, so runs are not reproducible
//! - **Seedable**: `GameRng::new(seed)` exists for tests and benchmarks
//!
//! ```
//! use too_many_monkeys::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut data = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut data);
//!
//! data.sort();
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source owned by a single match.
///
/// Uses ChaCha8 for speed while keeping streams from different seeds
/// uncorrelated across worker threads.
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

    /// Create a new RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Unbiased coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Shuffle a slice in place.
    ///
    /// Forward Fisher-Yates: position `i` is swapped with a uniformly chosen
    /// position in `[i, len)`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        for i in 0..len {
            let target = self.inner.gen_range(i..len);
            slice.swap(i, target);
        }
    }
}
