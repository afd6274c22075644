//! The authoritative game engine.
//!
//! `GameEngine` owns the configuration, the current `GameState`, the RNG
//! and a generation counter. It exposes the only state-changing commands:
//! `new_game`, `reset`, `reveal` and `resolve`.
//!
//! ## Resolution
//!
//! When a reveal leaves two cards face-up the engine counts the turn and
//! locks input immediately, then returns a [`ResolutionTicket`]. The caller
//! redeems the ticket with [`GameEngine::resolve`] once
//! [`GameConfig::resolution_delay`] has passed. Every deal bumps the
//! generation, so a ticket issued before `reset` or `new_game` is stale and
//! resolves to nothing.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    deal, CardId, EngineError, EngineResult, GameConfig, GameRng, GameRngState, GameState,
};

use super::event::{EventLog, GameEvent};
use super::schedule::ResolutionTicket;

/// Why a reveal had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Two cards are face-up and resolution is pending.
    InputLocked,
    /// The card is already matched.
    AlreadyFound,
    /// The card is already face-up.
    AlreadyVisible,
    /// No card with this id in the current deck.
    UnknownCard,
}

/// Result of a reveal command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a pair is face-up.
    Revealed,
    /// Second card is face-up; redeem the ticket after the resolution delay.
    ResolutionPending(ResolutionTicket),
}

impl RevealOutcome {
    /// Whether the reveal changed state.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RevealOutcome::Ignored(_))
    }

    /// The ticket to redeem, if this reveal started a resolution.
    #[must_use]
    pub fn ticket(&self) -> Option<ResolutionTicket> {
        match self {
            RevealOutcome::ResolutionPending(ticket) => Some(*ticket),
            _ => None,
        }
    }
}

/// Outcome of a redeemed ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// First card revealed this turn.
    pub first: CardId,
    /// Second card revealed this turn.
    pub second: CardId,
    /// Whether the two cards matched.
    pub matched: bool,
    /// Whether this resolution finished the game.
    pub completed: bool,
}

/// Serialized engine state.
#[derive(Serialize, Deserialize)]
struct EngineCheckpoint {
    config: GameConfig,
    state: GameState,
    rng: GameRngState,
    generation: u64,
}

/// Memory-match game engine.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    generation: u64,
    events: EventLog,
}

impl GameEngine {
    /// Create an engine and deal the first game.
    pub fn new(config: GameConfig, seed: u64) -> EngineResult<Self> {
        let mut rng = GameRng::new(seed);
        let deck = deal(&config, &mut rng.fork())?;

        let mut engine = Self {
            config,
            state: GameState::new(deck),
            rng,
            generation: 1,
            events: EventLog::new(),
        };
        engine.announce_deal();
        Ok(engine)
    }

    // === Commands ===

    /// Deal a new game with `pair_count` pairs, replacing the current one.
    ///
    /// On error the current game is left untouched.
    pub fn new_game(&mut self, pair_count: usize) -> EngineResult<&GameState> {
        let config = self.config.clone().with_pair_count(pair_count);
        config.validate()?;
        self.config = config;
        self.redeal()
    }

    /// Deal a new game with the configured pair count.
    pub fn reset(&mut self) -> EngineResult<&GameState> {
        self.redeal()
    }

    /// Turn a card face-up.
    ///
    /// Ignored while input is locked and for found, already visible or
    /// unknown cards. A second accepted reveal counts a turn, locks input
    /// and returns the ticket that resolves it.
    pub fn reveal(&mut self, id: CardId) -> RevealOutcome {
        if self.state.input_locked() {
            return self.ignore(id, IgnoreReason::InputLocked);
        }

        let card = match self.state.card(id) {
            Some(card) => *card,
            None => return self.ignore(id, IgnoreReason::UnknownCard),
        };
        if card.is_found {
            return self.ignore(id, IgnoreReason::AlreadyFound);
        }
        if card.is_visible {
            return self.ignore(id, IgnoreReason::AlreadyVisible);
        }

        let face_up = self.state.flip_up(id);
        self.events.push(GameEvent::CardRevealed { id, value: card.value });
        debug!("revealed {} (value {})", id, card.value);

        if face_up < 2 {
            return RevealOutcome::Revealed;
        }

        self.state.begin_resolution();
        let ticket = ResolutionTicket::new(self.generation, self.state.turn_count());
        debug!("turn {} locked, awaiting {}", self.state.turn_count(), ticket);
        RevealOutcome::ResolutionPending(ticket)
    }

    /// Apply a pending resolution.
    ///
    /// Returns `None` without touching state if the ticket is stale: issued
    /// for an earlier generation, for another turn, or already redeemed.
    pub fn resolve(&mut self, ticket: ResolutionTicket) -> Option<Resolution> {
        if self.pending_ticket() != Some(ticket) {
            trace!("discarding stale {} (generation {})", ticket, self.generation);
            return None;
        }

        let (first, second, matched) = self.state.settle()?;
        if matched {
            self.events.push(GameEvent::PairMatched {
                first: first.id,
                second: second.id,
                value: first.value,
            });
        } else {
            self.events.push(GameEvent::PairMissed {
                first: first.id,
                second: second.id,
            });
        }
        debug!(
            "{}: {} and {} {}",
            ticket,
            first.id,
            second.id,
            if matched { "matched" } else { "missed" }
        );

        let completed = self.state.is_complete();
        if completed {
            let turns = self.state.turn_count();
            info!("game {} completed in {} turns", self.generation, turns);
            self.events.push(GameEvent::GameCompleted { turns });
        }

        Some(Resolution {
            first: first.id,
            second: second.id,
            matched,
            completed,
        })
    }

    // === Observation ===

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state. O(1) for the deck.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generation of the current deal, starting at 1.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticket for the resolution currently pending, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<ResolutionTicket> {
        self.state
            .input_locked()
            .then(|| ResolutionTicket::new(self.generation, self.state.turn_count()))
    }

    /// Take buffered change notifications.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Checkpoints ===

    /// Encode config, state, RNG and generation.
    ///
    /// Undrained events are not included.
    pub fn checkpoint(&self) -> EngineResult<Vec<u8>> {
        let checkpoint = EngineCheckpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
            generation: self.generation,
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Rebuild an engine from [`checkpoint`](Self::checkpoint) output.
    ///
    /// A resolution pending at checkpoint time is still pending; its ticket
    /// is available from [`pending_ticket`](Self::pending_ticket).
    ///
    /// Fails with [`EngineError::InvalidCheckpoint`] when the decoded state
    /// could not have come from this engine, e.g. a pending resolution with
    /// no cards face-up.
    pub fn restore(bytes: &[u8]) -> EngineResult<Self> {
        let checkpoint: EngineCheckpoint = bincode::deserialize(bytes)?;
        checkpoint.config.validate()?;
        if !checkpoint.state.check_consistent(&checkpoint.config) {
            return Err(EngineError::InvalidCheckpoint);
        }

        Ok(Self {
            config: checkpoint.config,
            state: checkpoint.state,
            rng: GameRng::from_state(&checkpoint.rng),
            generation: checkpoint.generation,
            events: EventLog::new(),
        })
    }

    // === Internals ===

    fn redeal(&mut self) -> EngineResult<&GameState> {
        let deck = deal(&self.config, &mut self.rng.fork())?;
        self.state = GameState::new(deck);
        self.generation += 1;
        self.announce_deal();
        Ok(&self.state)
    }

    fn announce_deal(&mut self) {
        let pair_count = self.state.pair_count();
        info!("dealt game {} with {} pairs", self.generation, pair_count);
        self.events.push(GameEvent::GameStarted {
            generation: self.generation,
            pair_count,
        });
    }

    fn ignore(&self, id: CardId, reason: IgnoreReason) -> RevealOutcome {
        trace!("ignored reveal of {}: {:?}", id, reason);
        RevealOutcome::Ignored(reason)
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("generation", &self.generation)
            .field("phase", &self.state.phase())
            .field("turn_count", &self.state.turn_count())
            .field("matched_pair_count", &self.state.matched_pair_count())
            .finish()
    }
}
