// src/random.rs
//! Injectable source of uniform choices.
//!
//! Text generation and random walks never touch a global RNG; they ask a
//! [`Chooser`] for an index instead, so tests can pin the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform choice over `len` items.
pub trait Chooser {
    /// Returns an index in `0..len`. `len` is always at least 1.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Picks one element of `items`, or `None` if it is empty.
    /// An empty slice does not consume a choice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.choose_index(items.len()))
    }
}

/// `StdRng`-backed chooser, reproducible when built from a seed.
#[derive(Debug, Clone)]
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uses `seed` when given, entropy otherwise.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl Default for SeededChooser {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Chooser for SeededChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
