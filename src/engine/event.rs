//! Change notifications emitted by the engine.
//!
//! The presentation layer drains events after each command instead of
//! diffing snapshots. `GameCompleted` is pushed exactly once per finished
//! deck, on the transition into the `Complete` phase.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Default number of undrained events kept before the oldest are dropped.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Something that happened to the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh deck was dealt.
    GameStarted { generation: u64, pair_count: usize },

    /// A card was turned face-up.
    CardRevealed { id: CardId, value: u8 },

    /// Two face-up cards matched and are now found.
    PairMatched { first: CardId, second: CardId, value: u8 },

    /// Two face-up cards did not match and were turned back down.
    PairMissed { first: CardId, second: CardId },

    /// The last pair was found.
    GameCompleted { turns: u32 },
}

impl GameEvent {
    /// Whether this event ends a game.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, GameEvent::GameCompleted { .. })
    }
}

/// Bounded FIFO of undrained events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventLog {
    events: VecDeque<GameEvent>,
    capacity: usize,
    dropped: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventLog {
    /// Create an empty log with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log holding at most `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Event log capacity must be at least 1");
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    /// Append an event, evicting the oldest if full.
    pub fn push(&mut self, event: GameEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Take every buffered event in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events evicted because nobody drained them in time.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_drain() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(GameEvent::GameStarted { generation: 1, pair_count: 2 });
        log.push(GameEvent::CardRevealed { id: CardId::new(0), value: 4 });

        assert_eq!(log.len(), 2);

        let events = log.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::GameStarted { generation: 1, .. }));
        assert!(log.is_empty());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = EventLog::with_capacity(2);

        for turns in 0..5 {
            log.push(GameEvent::GameCompleted { turns });
        }

        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 3);
        assert_eq!(
            log.drain(),
            vec![GameEvent::GameCompleted { turns: 3 }, GameEvent::GameCompleted { turns: 4 }]
        );
    }

    #[test]
    #[should_panic(expected = "Event log capacity must be at least 1")]
    fn test_zero_capacity() {
        EventLog::with_capacity(0);
    }

    #[test]
    fn test_is_completion() {
        assert!(GameEvent::GameCompleted { turns: 6 }.is_completion());
        assert!(!GameEvent::PairMissed { first: CardId::new(0), second: CardId::new(1) }.is_completion());
    }

    #[test]
    fn test_serialization() {
        let event = GameEvent::PairMatched {
            first: CardId::new(1),
            second: CardId::new(5),
            value: 17,
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
