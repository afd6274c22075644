//! Game state for one dealt deck.
//!
//! ## GameState
//!
//! Owned exclusively by [`GameEngine`](crate::engine::GameEngine). Callers
//! get shared references or snapshots and never mutate fields directly:
//! - Deck (ordered, fixed length for the game)
//! - Turn and matched-pair counters
//! - Phase: `Idle`, `Resolving` (input locked) or `Complete`
//!
//! The deck is an `im::Vector` so snapshots handed to a renderer clone in O(1).

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, CardId};
use super::config::GameConfig;

/// Where a game is in its reveal/resolve cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Zero or one card face-up; reveals accepted.
    #[default]
    Idle,
    /// Two cards face-up; input locked until resolution.
    Resolving,
    /// Every card found. Terminal until the next deal.
    Complete,
}

/// State of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: Vector<Card>,

    /// Cards face-up and awaiting resolution, in reveal order.
    visible: SmallVec<[CardId; 2]>,

    turn_count: u32,

    matched_pair_count: usize,

    phase: GamePhase,
}

impl GameState {
    /// Create a fresh state around a dealt deck.
    #[must_use]
    pub(crate) fn new(deck: Vec<Card>) -> Self {
        debug_assert!(deck.len() % 2 == 0, "deck length must be even");
        debug_assert!(
            deck.iter().enumerate().all(|(i, c)| c.id.index() == i),
            "card ids must equal deck positions"
        );

        Self {
            deck: deck.into_iter().collect(),
            visible: SmallVec::new(),
            turn_count: 0,
            matched_pair_count: 0,
            phase: GamePhase::Idle,
        }
    }

    // === Observation ===

    /// All cards in deck order.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id.index())
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.deck.len() / 2
    }

    /// Completed reveal pairs, matched or not.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Pairs permanently matched so far.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.matched_pair_count
    }

    /// Whether every card has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    /// Whether reveals are currently rejected.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.phase == GamePhase::Resolving
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Cards face-up and awaiting resolution.
    #[must_use]
    pub fn visible_cards(&self) -> &[CardId] {
        &self.visible
    }

    /// How many cards carry each value.
    #[must_use]
    pub fn value_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.deck {
            *counts.entry(card.value).or_insert(0) += 1;
        }
        counts
    }

    /// Whether this state is one the engine could have produced under `config`.
    ///
    /// Used to vet decoded checkpoints before the engine adopts them.
    pub(crate) fn check_consistent(&self, config: &GameConfig) -> bool {
        if self.deck.len() != config.deck_len() {
            return false;
        }
        if !self.deck.iter().enumerate().all(|(i, c)| c.id.index() == i) {
            return false;
        }

        let visible_flags = self.deck.iter().filter(|c| c.is_visible).count();
        if self.visible.len() > 2 || visible_flags != self.visible.len() {
            return false;
        }
        if self.visible.len() == 2 && self.visible[0] == self.visible[1] {
            return false;
        }
        let face_up_ok = self.visible.iter().all(|id| {
            self.deck
                .get(id.index())
                .is_some_and(|c| c.is_visible && !c.is_found)
        });
        if !face_up_ok {
            return false;
        }

        let found = self.deck.iter().filter(|c| c.is_found).count();
        if found % 2 != 0 || self.matched_pair_count != found / 2 {
            return false;
        }
        if (self.turn_count as usize) < self.matched_pair_count {
            return false;
        }

        let resolving = self.visible.len() == 2;
        let complete = found == self.deck.len();
        match self.phase {
            GamePhase::Idle => !resolving && !complete,
            GamePhase::Resolving => resolving && !complete,
            GamePhase::Complete => complete,
        }
    }

    // === Mutation (engine only) ===

    /// Turn a card face-up. Returns the number of face-up cards afterwards.
    pub(crate) fn flip_up(&mut self, id: CardId) -> usize {
        if let Some(card) = self.deck.get_mut(id.index()) {
            card.is_visible = true;
            self.visible.push(id);
        }
        self.visible.len()
    }

    /// Count a turn and lock input until resolution.
    pub(crate) fn begin_resolution(&mut self) {
        debug_assert_eq!(self.visible.len(), 2);
        self.turn_count += 1;
        self.phase = GamePhase::Resolving;
    }

    /// Settle the face-up pair: mark found on a match, hide both, unlock.
    ///
    /// Returns the pair and whether it matched, or `None` when nothing was
    /// pending.
    pub(crate) fn settle(&mut self) -> Option<(Card, Card, bool)> {
        if self.phase != GamePhase::Resolving || self.visible.len() != 2 {
            return None;
        }

        let first = *self.deck.get(self.visible[0].index())?;
        let second = *self.deck.get(self.visible[1].index())?;
        let matched = first.matches(&second);

        for id in self.visible.drain(..) {
            if let Some(card) = self.deck.get_mut(id.index()) {
                card.is_visible = false;
                card.is_found |= matched;
            }
        }

        self.matched_pair_count = self.deck.iter().filter(|c| c.is_found).count() / 2;
        self.phase = if self.deck.iter().all(|c| c.is_found) {
            GamePhase::Complete
        } else {
            GamePhase::Idle
        };

        Some((first, second, matched))
    }
}
