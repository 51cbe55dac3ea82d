//! Source of randomness for deck draws.
//!
//! A deck never rolls dice itself; it asks an [`IndexPicker`] for a position.
//! Production code hands it an [`RngPicker`], tests hand it a closure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Chooses a position in `[0, bound)`. Only called with `bound > 0`.
pub trait IndexPicker {
    fn pick(&mut self, bound: usize) -> usize;
}

impl<F> IndexPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, bound: usize) -> usize {
        self(bound)
    }
}

/// Uniform picker backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngPicker<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        RngPicker { rng }
    }
}

impl RngPicker<ChaCha8Rng> {
    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        RngPicker::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        RngPicker::new(ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> IndexPicker for RngPicker<R> {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_pickers() {
        let mut always_last = |bound: usize| bound - 1;
        assert_eq!(always_last.pick(7), 6);
    }

    #[test]
    fn seeded_pickers_repeat_themselves() {
        let mut a = RngPicker::seeded(42);
        let mut b = RngPicker::seeded(42);
        let first: Vec<usize> = (1..50).map(|bound| a.pick(bound)).collect();
        let second: Vec<usize> = (1..50).map(|bound| b.pick(bound)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn picks_stay_in_bounds() {
        let mut picker = RngPicker::from_os_rng();
        for bound in 1..200 {
            assert!(picker.pick(bound) < bound);
        }
    }
}
