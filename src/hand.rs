//! Hands and HP totals.

use alloc::vec::Vec;

use crate::card::Card;

/// Exact total that counts as a goal, the analogue of blackjack's 21.
pub const TARGET: u32 = 400;

/// Sums the HP of `cards`.
///
/// Saturates instead of overflowing, so the result is independent of order.
#[must_use]
pub fn total(cards: &[Card]) -> u32 {
    cards
        .iter()
        .fold(0u32, |sum, card| sum.saturating_add(card.hp()))
}

/// Returns whether `total` hits [`TARGET`] exactly.
#[must_use]
pub const fn is_goal(total: u32) -> bool {
    total == TARGET
}

/// Returns whether `total` is over [`TARGET`].
#[must_use]
pub const fn is_bust(total: u32) -> bool {
    total > TARGET
}

/// The cards held by one participant, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Recomputes the HP total from the cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        total(&self.cards)
    }

    /// Returns whether the hand totals exactly [`TARGET`].
    #[must_use]
    pub fn is_goal(&self) -> bool {
        is_goal(self.total())
    }

    /// Returns whether the hand is over [`TARGET`].
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(self.total())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
