//! Random key generation for the timed loops.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::data::Currency;

/// Uniformly random valid keys.
///
/// Each benchmark closure owns one generator; nothing is shared between
/// variants, so two generators built from the same seed replay the same keys.
#[derive(Clone, Debug)]
pub struct KeyGenerator {
    rng: SmallRng,
}

impl KeyGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[inline(always)]
    pub fn next_key(&mut self) -> Currency {
        Currency::ALL[self.rng.random_range(0..Currency::COUNT)]
    }
}

impl Iterator for KeyGenerator {
    type Item = Currency;

    fn next(&mut self) -> Option<Currency> {
        Some(self.next_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_keys() {
        let a: Vec<Currency> = KeyGenerator::new(42).take(1000).collect();
        let b: Vec<Currency> = KeyGenerator::new(42).take(1000).collect();
        assert_eq!(a, b);

        let c: Vec<Currency> = KeyGenerator::new(43).take(1000).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_uniform_over_all_keys() {
        let trials = 380_000;
        let expected = trials / Currency::COUNT;
        let tolerance = expected / 10;

        let mut counts = [0usize; Currency::COUNT];
        let mut keys = KeyGenerator::new(0x5eed);
        for _ in 0..trials {
            counts[keys.next_key().index()] += 1;
        }

        for (i, &count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "{:?} drawn {} times, expected {} ± {}",
                Currency::ALL[i],
                count,
                expected,
                tolerance
            );
        }
    }

    #[test]
    fn test_entropy_seeded_generator_yields_valid_keys() {
        let seed = crate::config::SeedPolicy::Entropy.resolve();
        let mut keys = KeyGenerator::new(seed);
        for _ in 0..1000 {
            let key = keys.next_key();
            assert_eq!(Currency::from_index(key.index()), Some(key));
        }
    }
}
