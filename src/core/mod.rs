//! Core types: cards, configuration, dealing, state, RNG, errors.
//!
//! Everything here is deterministic given a seed. The state machine that
//! drives these types lives in [`crate::engine`].

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod state;

pub use card::{Card, CardId};
pub use config::{GameConfig, ValuePolicy, DEFAULT_PAIR_COUNT, DEFAULT_RESOLUTION_DELAY_MS, MAX_VALUE, MIN_VALUE};
pub use deck::deal;
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState};
