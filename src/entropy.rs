//! Explicitly owned randomness.
//!
//! Randomized producers never touch a global generator. Each one receives a
//! `&mut Entropy` at construction, forks a private child from it and keeps
//! that child for its whole life. Two producer trees built from parents with
//! the same seed therefore replay draw-for-draw, and a tree can be moved to
//! another thread without sharing generator state.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable random source used by every randomized producer.
#[derive(Debug, Clone)]
pub struct Entropy {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Entropy {
    /// Create a deterministic source from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source with a fresh seed taken from the thread-local generator.
    ///
    /// The seed is kept so a failing run can still be reported and replayed.
    pub fn from_os() -> Self {
        Self::from_seed(rand::thread_rng().gen())
    }

    /// Seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent child source from the next 64 bits of this one.
    pub fn fork(&mut self) -> Entropy {
        let child_seed = self.rng.next_u64();
        Entropy::from_seed(child_seed)
    }
}

impl RngCore for Entropy {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
