use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;

/// Source of randomness handed to each bean at construction.
///
/// Luck-mode beans consult [`next_binary`](RandomSource::next_binary) once per
/// peg; skill-mode beans draw a single [`next_gaussian`](RandomSource::next_gaussian)
/// sample when they are built and never touch the source again.
pub trait RandomSource: fmt::Debug {
    /// Returns `0` or `1` with equal probability. `1` moves the bean right.
    fn next_binary(&mut self) -> u8;
    /// Returns a sample from the standard normal distribution.
    fn next_gaussian(&mut self) -> f64;
}

/// ChaCha20-backed source. The same seed always yields the same stream.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_binary(&mut self) -> u8 {
        self.rng.random_range(0..2)
    }

    fn next_gaussian(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Replays fixed outcomes, cycling when a script runs out.
///
/// An empty script yields `0` for binary draws and `0.0` for Gaussian draws.
///
/// ```
/// use beancounter_engine::rng::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new(vec![1, 0], vec![2.0]);
/// assert_eq!(rng.next_binary(), 1);
/// assert_eq!(rng.next_binary(), 0);
/// assert_eq!(rng.next_binary(), 1);
/// assert_eq!(rng.next_gaussian(), 2.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    binary: Vec<u8>,
    gaussian: Vec<f64>,
    binary_pos: usize,
    gaussian_pos: usize,
}

impl ScriptedRandom {
    pub fn new(binary: Vec<u8>, gaussian: Vec<f64>) -> Self {
        Self {
            binary,
            gaussian,
            binary_pos: 0,
            gaussian_pos: 0,
        }
    }

    pub fn binary(outcomes: Vec<u8>) -> Self {
        Self::new(outcomes, Vec::new())
    }

    pub fn gaussian(sample: f64) -> Self {
        Self::new(Vec::new(), vec![sample])
    }

    /// Number of binary outcomes handed out so far.
    pub fn binary_draws(&self) -> usize {
        self.binary_pos
    }
}

impl RandomSource for ScriptedRandom {
    fn next_binary(&mut self) -> u8 {
        if self.binary.is_empty() {
            self.binary_pos += 1;
            return 0;
        }
        let v = self.binary[self.binary_pos % self.binary.len()];
        self.binary_pos += 1;
        v.min(1)
    }

    fn next_gaussian(&mut self) -> f64 {
        if self.gaussian.is_empty() {
            return 0.0;
        }
        let v = self.gaussian[self.gaussian_pos % self.gaussian.len()];
        self.gaussian_pos += 1;
        v
    }
}
