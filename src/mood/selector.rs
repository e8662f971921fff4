//! Quote selection, the only source of randomness in a scan.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Picks an index into a non-empty list of quotes.
pub trait QuoteSelector {
    /// Return an index in `0..len`. `len` is never zero.
    fn select_index(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for RandomSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSelector<StdRng> {
    /// Reproducible selector; the same seed yields the same quote sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuoteSelector for RandomSelector<R> {
    fn select_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same slot (wrapped into range).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl QuoteSelector for FixedSelector {
    fn select_index(&mut self, len: usize) -> usize {
        self.0 % len.max(1)
    }
}
