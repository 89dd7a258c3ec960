//! Injectable source of random indices.
//!
//! The weak tier and the balanced tier's corner choice are the only places
//! randomness enters move selection. Both go through [`RandomIndex`] so tests
//! can script the sequence.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Provides uniform random indices.
pub trait RandomIndex {
    /// Returns an index in `0..len`, or `0` when `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: RandomIndex + ?Sized> RandomIndex for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// [`RandomIndex`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndex<R>(R);

impl<R: Rng> RngIndex<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngIndex<ThreadRng> {
    /// Uses the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngIndex<StdRng> {
    /// Deterministic generator for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// OS-seeded generator that can be sent across threads.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomIndex for RngIndex<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// Replays a scripted list of indices, wrapping at the end.
///
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<usize>,
    next: usize,
}

impl FixedSequence {
    /// Creates a sequence from the given values.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomIndex for FixedSequence {
    fn pick(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}

/// Picks one of `items` uniformly. Returns `None` for an empty slice.
pub(crate) fn choose<R: RandomIndex + ?Sized>(rng: &mut R, items: &[usize]) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()) % items.len()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_sequence_wraps_and_reduces() {
        let mut seq = FixedSequence::new(vec![1, 7]);
        assert_eq!(seq.pick(4), 1);
        assert_eq!(seq.pick(4), 3);
        assert_eq!(seq.pick(4), 1);
    }

    #[test]
    fn test_seeded_rng_in_range() {
        let mut rng = RngIndex::seeded(7);
        for len in 1..10 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn test_zero_length_pick_is_zero() {
        let mut seq = FixedSequence::new(vec![3]);
        assert_eq!(seq.pick(0), 0);
        let mut rng = RngIndex::seeded(1);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn test_choose_empty() {
        let mut seq = FixedSequence::default();
        assert_eq!(choose(&mut seq, &[]), None);
        assert_eq!(choose(&mut seq, &[5]), Some(5));
    }
}
