//! Card identity and per-card state.
//!
//! A `CardId` is assigned by the engine when a deck is dealt and equals the
//! card's slot in the shuffled deck. It is stable for the lifetime of one
//! game; renderers may reorder or virtualize their lists freely and keep
//! addressing cards by id.

use serde::{Deserialize, Serialize};

/// Engine-assigned card identifier, `0..deck_len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Slot of this card in the deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One slot in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier.
    pub id: CardId,

    /// Face value in `1..=99`.
    pub value: u8,

    /// Face-up and awaiting resolution.
    pub is_visible: bool,

    /// Permanently matched. Terminal for this card.
    pub is_found: bool,
}

impl Card {
    /// Create a hidden, unfound card.
    #[must_use]
    pub const fn new(id: CardId, value: u8) -> Self {
        Self {
            id,
            value,
            is_visible: false,
            is_found: false,
        }
    }

    /// Whether a reveal on this card would have any effect.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.is_visible && !self.is_found
    }

    /// Whether this card pairs with `other`.
    ///
    /// Matching is by value only; a card never matches itself.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.id != other.id && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(CardId::from(7), id);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_card_is_hidden() {
        let card = Card::new(CardId::new(0), 42);

        assert!(card.is_hidden());
        assert!(!card.is_visible);
        assert!(!card.is_found);
    }

    #[test]
    fn test_matches() {
        let a = Card::new(CardId::new(0), 12);
        let b = Card::new(CardId::new(3), 12);
        let c = Card::new(CardId::new(5), 13);

        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&c));
        assert!(!a.matches(&a));
    }

    #[test]
    fn test_serialization() {
        let mut card = Card::new(CardId::new(4), 99);
        card.is_found = true;

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
