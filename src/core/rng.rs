//! Seedable randomness for deck shuffling.
//!
//! Shuffling goes through the [`Shuffler`] trait so games and tests can
//! inject the permutation source. [`GameRng`] is the default
//! implementation: ChaCha8, seeded from a `u64`, with O(1) state capture.
//!
//! ```
//! use rust_tabletop::core::{GameRng, Shuffler};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.permute(&mut left);
//! b.permute(&mut right);
//!
//! // Same seed, same permutation
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly random permutations.
///
/// Implementations must leave the slice holding the same elements,
/// reordered.
pub trait Shuffler {
    /// Reorder `items` in place.
    fn permute<T>(&mut self, items: &mut [T]);
}

/// Deterministic RNG used as the default [`Shuffler`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent, deterministic stream.
    ///
    /// Useful when several decks should shuffle independently but
    /// reproducibly from one game seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Capture the current state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl Shuffler for GameRng {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_permutation() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            let mut a: Vec<u32> = (0..20).collect();
            let mut b = a.clone();
            rng1.permute(&mut a);
            rng2.permute(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_permute_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.permute(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_fork_differs_from_parent() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        rng.permute(&mut a);
        forked.permute(&mut b);

        assert_ne!(a, b);
        assert_ne!(forked.seed(), 42);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..5 {
            rng.permute(&mut [0u32; 16]);
        }

        let state = rng.state();
        let mut expected: Vec<u32> = (0..32).collect();
        rng.permute(&mut expected);

        let mut restored = GameRng::from_state(&state);
        let mut actual: Vec<u32> = (0..32).collect();
        restored.permute(&mut actual);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
