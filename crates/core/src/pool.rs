//! Letter pool - weighted random letter generation
//!
//! New pieces get their letters from a [`WeightedLetterPool`]: an ordered list
//! of `(letter, weight)` entries plus their precomputed total. A draw picks a
//! uniform integer below the total and walks the entries subtracting weights
//! until the remainder goes negative.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use serde::{Deserialize, Serialize};

/// Compiled-in letter distribution.
///
/// Vowels and common consonants are weighted up, rare letters down.
pub const DEFAULT_LETTER_WEIGHTS: [(char, u32); 26] = [
    ('A', 6),
    ('B', 2),
    ('C', 3),
    ('D', 4),
    ('E', 6),
    ('F', 3),
    ('G', 2),
    ('H', 2),
    ('I', 5),
    ('J', 1),
    ('K', 2),
    ('L', 4),
    ('M', 3),
    ('N', 4),
    ('O', 5),
    ('P', 3),
    ('Q', 1),
    ('R', 3),
    ('S', 3),
    ('T', 4),
    ('U', 5),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, max).
    ///
    /// Scales by multiply-and-shift so the result comes from the high bits;
    /// the low bits of an LCG cycle with a short period.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_below(0)");
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Current internal state (feed back into `new` to resume the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// One entry of a letter distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterWeight {
    pub letter: char,
    pub weight: u32,
}

/// Weighted distribution over the alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedLetterPool {
    entries: Vec<LetterWeight>,
    total_weight: u32,
}

impl WeightedLetterPool {
    /// An empty pool; `draw` requires at least one weighted entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool built from [`DEFAULT_LETTER_WEIGHTS`]
    pub fn standard() -> Self {
        Self::from_weights(DEFAULT_LETTER_WEIGHTS)
    }

    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (char, u32)>,
    {
        let mut pool = Self::new();
        for (letter, weight) in weights {
            pool.add(letter, weight);
        }
        pool
    }

    /// Append an entry and grow the total weight.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not in `A..Z` (drawn letters end up on tiles),
    /// or if the total weight would overflow `u32`.
    pub fn add(&mut self, letter: char, weight: u32) {
        assert!(
            letter.is_ascii_uppercase(),
            "pool letter must be in A..Z, got {:?}",
            letter
        );
        let Some(total_weight) = self.total_weight.checked_add(weight) else {
            panic!(
                "adding {:?} with weight {} overflows the total weight {}",
                letter, weight, self.total_weight
            );
        };
        self.entries.push(LetterWeight { letter, weight });
        self.total_weight = total_weight;
    }

    /// Draw one letter.
    ///
    /// Entries with zero weight are never returned.
    ///
    /// # Panics
    ///
    /// Panics if the total weight is zero.
    pub fn draw(&self, rng: &mut SimpleRng) -> char {
        let mut remaining = i64::from(rng.next_below(self.total_weight));
        for entry in &self.entries {
            remaining -= i64::from(entry.weight);
            if remaining < 0 {
                return entry.letter;
            }
        }
        unreachable!("draw walked past the total weight")
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    pub fn entries(&self) -> &[LetterWeight] {
        &self.entries
    }

    /// True when nothing can be drawn
    pub fn is_empty(&self) -> bool {
        self.total_weight == 0
    }

    /// Expected fraction of draws that return `letter`
    pub fn share(&self, letter: char) -> f64 {
        if self.total_weight == 0 {
            return 0.0;
        }
        let weight: u32 = self
            .entries
            .iter()
            .filter(|e| e.letter == letter)
            .map(|e| e.weight)
            .sum();
        f64::from(weight) / f64::from(self.total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for max in [1, 2, 3, 75, 1000] {
            for _ in 0..500 {
                assert!(rng.next_below(max) < max);
            }
        }
    }

    #[test]
    fn test_standard_pool_totals() {
        let pool = WeightedLetterPool::standard();
        assert_eq!(pool.entries().len(), 26);
        assert_eq!(pool.total_weight(), 79);
        assert!((pool.share('A') - 6.0 / 79.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weight_letter_never_drawn() {
        let pool = WeightedLetterPool::from_weights([('A', 0), ('B', 3), ('C', 0)]);
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert_eq!(pool.draw(&mut rng), 'B');
        }
    }

    #[test]
    #[should_panic]
    fn test_draw_from_empty_pool_panics() {
        let pool = WeightedLetterPool::new();
        pool.draw(&mut SimpleRng::new(1));
    }

    #[test]
    #[should_panic(expected = "overflows the total weight")]
    fn test_add_rejects_total_weight_overflow() {
        let mut pool = WeightedLetterPool::new();
        pool.add('A', 3_000_000_000);
        pool.add('B', 3_000_000_000);
    }
}
