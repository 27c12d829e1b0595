//! Random sources for tile spawning.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the [`TileRng`] trait
//! - **Deterministic**: [`GameRng`] with the same seed spawns the same tiles
//! - **Scriptable**: [`ScriptedRng`] forces exact spawn cells and values
//!
//! ## Usage
//!
//! ```
//! use rust_2048::core::{GameRng, ScriptedRng, TileRng};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.next_index(16), rng2.next_index(16));
//!
//! // Pick the third empty cell, then roll a 4
//! let mut scripted = ScriptedRng::new().with_indices([2]).with_units([0.95]);
//! assert_eq!(scripted.next_index(5), 2);
//! assert_eq!(scripted.next_unit(), 0.95);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of randomness for spawning tiles.
///
/// The engine asks for one index (which empty cell) and one unit float
/// (which value) per spawn, in that order.
pub trait TileRng {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn OS seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileRng for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index called with empty range");
        self.inner.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays queued outcomes.
///
/// Indices are reduced modulo `bound`. An exhausted queue yields `0` for
/// indices and `0.0` for units (the first empty cell, value 2).
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedRng {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index outcomes.
    #[must_use]
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue unit-float outcomes.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Append one index outcome.
    pub fn push_index(&mut self, index: usize) {
        self.indices.push_back(index);
    }

    /// Append one unit-float outcome.
    pub fn push_unit(&mut self, unit: f64) {
        self.units.push_back(unit);
    }

    /// Number of outcomes still queued (indices, units).
    #[must_use]
    pub fn remaining(&self) -> (usize, usize) {
        (self.indices.len(), self.units.len())
    }
}

impl TileRng for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % bound.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(1000), rng2.next_index(1000));
            assert_eq!(rng1.next_unit(), rng2.next_unit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_ranges() {
        let mut rng = GameRng::new(7);
        for bound in 1..=16 {
            assert!(rng.next_index(bound) < bound);
        }
        for _ in 0..100 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }

    #[test]
    fn test_scripted_replays_then_defaults() {
        let mut rng = ScriptedRng::new().with_indices([3, 9]).with_units([0.5]);

        assert_eq!(rng.next_index(4), 3);
        assert_eq!(rng.next_index(4), 1); // 9 % 4
        assert_eq!(rng.next_index(4), 0);

        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.0);
        assert_eq!(rng.remaining(), (0, 0));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: TileRng>(mut rng: R) -> usize {
            rng.next_index(3)
        }

        let mut rng = ScriptedRng::new().with_indices([2, 1]);
        assert_eq!(draw(&mut rng), 2);
        assert_eq!(rng.next_index(3), 1);
    }
}
