//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game except the shuffle:
//! how many pairs are dealt, how long two face-up cards stay visible
//! before resolution, and how pair values are drawn.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::rng::range_len;

/// Smallest card face value.
pub const MIN_VALUE: u8 = 1;

/// Largest card face value.
pub const MAX_VALUE: u8 = 99;

/// Default number of pairs (a 12 card board).
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// Default player reaction window before two face-up cards resolve.
pub const DEFAULT_RESOLUTION_DELAY_MS: u64 = 1000;

/// How pair values are drawn when dealing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuePolicy {
    /// Every pair gets its own value; each value appears exactly twice.
    #[default]
    Distinct,
    /// Independent uniform draws per pair. Two pairs may share a value,
    /// in which case any two cards of that value match each other.
    Independent,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of matching pairs (deck size is twice this).
    pub pair_count: usize,

    /// Delay between the second reveal and its resolution, in milliseconds.
    pub resolution_delay_ms: u64,

    /// Value generation policy.
    pub value_policy: ValuePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            value_policy: ValuePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults and the given pair count.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the value generation policy.
    #[must_use]
    pub fn with_value_policy(mut self, policy: ValuePolicy) -> Self {
        self.value_policy = policy;
        self
    }

    /// Resolution delay as a `Duration`.
    #[must_use]
    pub fn resolution_delay(&self) -> Duration {
        Duration::from_millis(self.resolution_delay_ms)
    }

    /// Range card values are drawn from.
    #[must_use]
    pub fn value_range(&self) -> RangeInclusive<u8> {
        MIN_VALUE..=MAX_VALUE
    }

    /// Deck length for this configuration.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that a deck can be dealt from this configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.pair_count == 0 {
            return Err(EngineError::InvalidPairCount(self.pair_count));
        }

        let available = range_len(&self.value_range());
        if self.value_policy == ValuePolicy::Distinct && self.pair_count > available {
            return Err(EngineError::NotEnoughValues {
                requested: self.pair_count,
                available,
            });
        }

        Ok(())
    }
}
