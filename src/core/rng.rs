//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Forkable**: Every deal draws from its own branch, so a reset never
//!   depends on how many values the previous game consumed
//! - **Serializable**: O(1) state capture and restore for checkpoints
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deal = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut deal2 = rng2.fork();
//!
//! assert_eq!(deal.gen_value(1..=99), deal2.gen_value(1..=99));
//! ```

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Draw one card value uniformly from `range`.
    pub fn gen_value(&mut self, range: RangeInclusive<u8>) -> u8 {
        self.inner.gen_range(range)
    }

    /// Draw `amount` pairwise distinct values uniformly from `range`.
    ///
    /// Returns `None` when the range holds fewer than `amount` values.
    pub fn sample_distinct(&mut self, range: RangeInclusive<u8>, amount: usize) -> Option<Vec<u8>> {
        let start = *range.start();
        let available = range_len(&range);
        if amount > available {
            return None;
        }

        let picked = rand::seq::index::sample(&mut self.inner, available, amount);
        Some(picked.into_iter().map(|offset| start + offset as u8).collect())
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
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

/// Number of values in an inclusive `u8` range.
pub(crate) fn range_len(range: &RangeInclusive<u8>) -> usize {
    if range.is_empty() {
        0
    } else {
        usize::from(*range.end() - *range.start()) + 1
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
