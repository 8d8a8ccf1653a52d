//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests,
//! a seeded or scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Flip a fair coin.
    fn coin_flip(&mut self) -> bool {
        self.next_f64() >= 0.5
    }
}

/// Production RNG backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdRandom {
    inner: StdRng,
}

impl StdRandom {
    /// Seeds from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Seeds deterministically, for replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl DeterministicRng for StdRandom {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.inner.random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_range_stays_in_bounds() {
        let mut rng = StdRandom::seeded(7);
        for _ in 0..1_000 {
            let value = rng.next_u32_range(3, 9);
            assert!((3..=9).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_range_returns_bound() {
        let mut rng = StdRandom::seeded(7);
        assert_eq!(rng.next_u32_range(42, 42), 42);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRandom::seeded(99);
        let mut b = StdRandom::seeded(99);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32_range(0, 1_000)).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32_range(0, 1_000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_next_f64_is_unit_interval() {
        let mut rng = StdRandom::seeded(1);
        for _ in 0..1_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
