//! Random number generation for level assembly
//!
//! Uses a seeded ChaCha RNG so a layout is reproducible from its seed.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Level assembly random number generator
///
/// Wraps ChaCha8Rng for reproducible candidate ordering. The assembler takes
/// it as `&mut`, so a caller that fixes the seed fixes the whole layout.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }

    /// Return a freshly shuffled copy of `items`
    ///
    /// Candidate pools are re-permuted at every placement decision, so equally
    /// valid candidates are not biased by catalogue declaration order.
    pub fn shuffled<T: Copy>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}

#[cfg(feature = "std")]
impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
