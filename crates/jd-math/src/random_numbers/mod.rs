//! Random number generators.
//!
//! The simulators never reach for a process-wide generator: callers inject
//! any `rand::Rng`. [`MersenneTwisterUniformRng`] wraps the `rand_mt`
//! MT19937-64 engine behind `rand::RngCore` so it can be handed to the
//! `rand_distr` samplers directly.

use rand::{RngCore, SeedableRng};
use rand_mt::Mt19937GenRand64;

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl std::fmt::Debug for MersenneTwisterUniformRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwisterUniformRng").finish_non_exhaustive()
    }
}

impl RngCore for MersenneTwisterUniformRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.rng.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MersenneTwisterUniformRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }
}

/// A reproducible generator for the given seed.
pub fn seeded_rng(seed: u64) -> MersenneTwisterUniformRng {
    MersenneTwisterUniformRng::new(seed)
}

/// A generator seeded from the thread-local entropy source.
///
/// Two calls give independent streams; use [`seeded_rng`] when results must
/// be reproducible.
pub fn entropy_rng() -> MersenneTwisterUniformRng {
    MersenneTwisterUniformRng::new(rand::random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn mt_range() {
        let mut rng = MersenneTwisterUniformRng::new(42);
        for _ in 0..1_000 {
            let x: f64 = rng.gen();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = seeded_rng(7);
        let mut b = seeded_rng(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = seeded_rng(1);
        let mut b = seeded_rng(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn usable_through_rand_traits() {
        let mut rng = MersenneTwisterUniformRng::from_seed(42u64.to_le_bytes());
        let mean = (0..10_000).map(|_| rng.gen::<f64>()).sum::<f64>() / 10_000.0;
        assert!((mean - 0.5).abs() < 0.02, "mean {mean} out of expected range");

        let mut bytes = [0u8; 13];
        rng.try_fill_bytes(&mut bytes).unwrap();
        assert!(bytes.iter().any(|&b| b != 0));
    }
}
