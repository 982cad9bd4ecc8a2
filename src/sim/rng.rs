//! Seedable randomness for the simulation
//!
//! All random draws go through [`RandomSource`] so tests can swap in a
//! scripted sequence and production uses a seeded PCG stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A source of uniform samples
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_unit(&mut self) -> f32;

    /// Uniform real in [min, max)
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform integer in [min, max] (inclusive)
    fn range_int(&mut self, min: u32, max: u32) -> u32 {
        let value = self.range(min as f32, max as f32 + 1.0).floor() as u32;
        // f32 rounding can land exactly on max + 1
        value.min(max)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Build the default simulation RNG from a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of unit samples, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f32>,
    index: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(values: Vec<f32>) -> Self {
        assert!(!values.is_empty());
        Self { values, index: 0 }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
