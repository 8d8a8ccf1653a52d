//! Deterministic `DeterministicRng` implementations for tests.

use akkad_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. A shuffle with this RNG leaves the cards in ascending order
/// and every coin flip comes up reversed.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from a predetermined sequence, clamped into
/// the requested range. Once the sequence is exhausted it behaves like
/// `MockRng`. Coin flips come from a separate sequence of booleans.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
    flips: Vec<bool>,
    flip_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            flips: Vec::new(),
            flip_index: 0,
        }
    }

    /// Scripted coin flips (`true` = upright), consumed in order.
    #[must_use]
    pub fn with_flips(mut self, flips: Vec<bool>) -> Self {
        self.flips = flips;
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let Some(&val) = self.values.get(self.index) else {
            return min;
        };
        self.index += 1;
        val.clamp(min, max)
    }

    fn next_f64(&mut self) -> f64 {
        let Some(&flip) = self.flips.get(self.flip_index) else {
            return 0.0;
        };
        self.flip_index += 1;
        if flip { 0.75 } else { 0.25 }
    }
}
