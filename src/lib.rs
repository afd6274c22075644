//! # memory-match
//!
//! Game-state engine for a memory matching card game: a shuffled deck of
//! value pairs, two-card reveals, a delayed match check, turn counting and
//! completion detection.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `GameEngine` owns the `GameState`. Renderers read
//!    snapshots and issue commands; they never mutate cards directly.
//!
//! 2. **No Hidden Clocks**: Resolution is a ticket redeemed by whoever owns
//!    time. `GameSession` does this against a virtual clock.
//!
//! 3. **Generations**: Every deal bumps a generation counter. Tickets carry
//!    the generation they were issued in, so a resolution scheduled before
//!    a reset can never touch the new game.
//!
//! 4. **Deterministic**: All randomness comes from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, dealing, state, RNG, errors
//! - `engine`: Engine state machine, events, timers, session driver
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId,
    GameConfig, ValuePolicy,
    GameRng, GameRngState,
    GamePhase, GameState,
    EngineError, EngineResult,
};

pub use crate::engine::{
    GameEngine, GameSession,
    GameEvent, EventLog,
    IgnoreReason, Resolution, RevealOutcome,
    ResolutionTicket, TimerQueue,
};
