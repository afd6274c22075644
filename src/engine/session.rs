//! Single-threaded driver pairing an engine with a virtual clock.
//!
//! The presentation layer forwards taps to [`GameSession::tap`] and calls
//! [`GameSession::advance`] from its frame or timer callback. Resolutions
//! fire from `advance` once their delay has elapsed; nothing blocks.

use std::time::Duration;

use log::debug;

use crate::core::{CardId, EngineResult, GameConfig, GameState};

use super::event::GameEvent;
use super::game::{GameEngine, Resolution, RevealOutcome};
use super::schedule::TimerQueue;

/// Engine plus its pending resolution timers.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    timers: TimerQueue,
    now: Duration,
}

impl GameSession {
    /// Create a session with a freshly dealt game.
    pub fn new(config: GameConfig, seed: u64) -> EngineResult<Self> {
        Ok(Self::from_engine(GameEngine::new(config, seed)?))
    }

    /// Wrap an existing engine, e.g. one restored from a checkpoint.
    ///
    /// A resolution already pending in the engine is rescheduled a full
    /// delay from now.
    pub fn from_engine(engine: GameEngine) -> Self {
        let mut session = Self {
            engine,
            timers: TimerQueue::new(),
            now: Duration::ZERO,
        };
        if let Some(ticket) = session.engine.pending_ticket() {
            let due_at = session.now + session.engine.config().resolution_delay();
            session.timers.schedule(due_at, ticket);
        }
        session
    }

    /// Reveal a card, scheduling its resolution if it completes a pair.
    pub fn tap(&mut self, id: CardId) -> RevealOutcome {
        let outcome = self.engine.reveal(id);
        if let Some(ticket) = outcome.ticket() {
            let due_at = self.now.saturating_add(self.engine.config().resolution_delay());
            debug!("scheduled {} at {:?}", ticket, due_at);
            self.timers.schedule(due_at, ticket);
        }
        outcome
    }

    /// Move the clock forward and fire every resolution now due.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Resolution> {
        self.now = self.now.saturating_add(elapsed);
        self.timers
            .pop_due(self.now)
            .into_iter()
            .filter_map(|ticket| self.engine.resolve(ticket))
            .collect()
    }

    /// Advance exactly to the next pending resolution, if any.
    pub fn advance_to_next(&mut self) -> Vec<Resolution> {
        match self.timers.next_due() {
            Some(due_at) => self.advance(due_at.saturating_sub(self.now)),
            None => Vec::new(),
        }
    }

    /// Deal a new game with the configured pair count.
    ///
    /// Pending timers are dropped only once the new deal succeeds.
    pub fn restart(&mut self) -> EngineResult<&GameState> {
        self.engine.reset()?;
        self.timers.clear();
        Ok(self.engine.state())
    }

    /// Deal a new game with `pair_count` pairs.
    pub fn new_game(&mut self, pair_count: usize) -> EngineResult<&GameState> {
        self.engine.new_game(pair_count)?;
        self.timers.clear();
        Ok(self.engine.state())
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Underlying engine.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Virtual time since the session started.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Resolutions scheduled but not yet fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Take buffered change notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.engine.drain_events()
    }
}
