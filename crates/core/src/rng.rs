//! RNG module - seeded piece selection
//!
//! Pieces are drawn independently and uniformly from the catalog; there is no
//! bag, so repeats and droughts are possible. A small LCG keeps runs
//! reproducible for tests and benches.

use crate::types::{ShapeKind, SHAPE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the full 32-bit output so the choice depends on the high
    /// bits; the low bits of a power-of-two LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a catalog kind, each with probability 1/7
    pub fn choose_kind(&mut self) -> ShapeKind {
        let index = self.next_range(SHAPE_COUNT as u32) as usize;
        ShapeKind::ALL[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.choose_kind(), b.choose_kind());
        }
    }

    #[test]
    fn test_zero_seed_is_not_degenerate() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.seed(), 0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(1), 0);
    }

    #[test]
    fn test_choose_kind_covers_catalog_evenly() {
        let mut rng = SimpleRng::new(12345);
        let mut counts = [0u32; SHAPE_COUNT];
        for _ in 0..7000 {
            counts[rng.choose_kind().index()] += 1;
        }
        // Expect ~1000 each; allow a generous band.
        for (i, &n) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&n), "kind {} drawn {} times", i, n);
        }
    }
}
