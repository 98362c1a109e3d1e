//! The single-use shoe a session draws from.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::card::Card;
use crate::error::ShoeError;
use crate::sync::Mutex;

/// Number of cards in a freshly built shoe.
pub const SHOE_SIZE: usize = 208;

/// Persisted form of a shoe: its fixed sequence and how far it has been drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoeSnapshot {
    /// Cards in draw order.
    pub cards: Vec<Card>,
    /// Number of cards already handed out.
    pub drawn_count: usize,
}

/// A fixed sequence of cards consumed front to back.
///
/// The sequence is chosen once, when the shoe is built, and is never
/// reshuffled or refilled. Draws are serialized by a lock around the cursor,
/// so concurrent callers always receive consecutive positions.
pub struct Shoe {
    cards: Vec<Card>,
    drawn: Mutex<usize>,
}

impl Shoe {
    /// Builds a shoe of `size` cards picked uniformly, with replacement, from
    /// `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyCatalog`] if `catalog` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use hpjack::{Card, Shoe};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let catalog = [Card::new(1, 120).unwrap(), Card::new(2, 60).unwrap()];
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(&catalog, 10, &mut rng).unwrap();
    /// assert_eq!(shoe.len(), 10);
    /// assert_eq!(shoe.remaining(), 10);
    /// ```
    pub fn new<R: Rng>(catalog: &[Card], size: usize, rng: &mut R) -> Result<Self, ShoeError> {
        if catalog.is_empty() {
            return Err(ShoeError::EmptyCatalog);
        }

        let cards: Vec<Card> = (0..size)
            .map(|_| catalog[rng.random_range(0..catalog.len())])
            .collect();

        tracing::debug!(size, catalog = catalog.len(), "shoe built");

        Ok(Self::from_cards(cards))
    }

    /// Wraps an explicit card sequence, first card drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            drawn: Mutex::new(0),
        }
    }

    /// Rebuilds a shoe from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CursorOutOfRange`] if the snapshot's cursor is
    /// past the end of its cards.
    pub fn restore(snapshot: ShoeSnapshot) -> Result<Self, ShoeError> {
        let ShoeSnapshot { cards, drawn_count } = snapshot;
        if drawn_count > cards.len() {
            return Err(ShoeError::CursorOutOfRange {
                drawn: drawn_count,
                len: cards.len(),
            });
        }

        Ok(Self {
            cards,
            drawn: Mutex::new(drawn_count),
        })
    }

    /// Captures the sequence and the cursor.
    #[must_use]
    pub fn snapshot(&self) -> ShoeSnapshot {
        ShoeSnapshot {
            cards: self.cards.clone(),
            drawn_count: self.drawn_count(),
        }
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] once every card has been drawn.
    pub fn draw(&self) -> Result<Card, ShoeError> {
        let mut drawn = self.drawn.lock();
        let card = *self.cards.get(*drawn).ok_or(ShoeError::Exhausted)?;
        *drawn += 1;
        drop(drawn);

        Ok(card)
    }

    /// Draws the next card only if the cursor still equals `expected`.
    ///
    /// Lets a caller that persists the cursor elsewhere detect a concurrent
    /// draw and retry with fresh state.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CursorMismatch`] if another draw happened first,
    /// or [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn draw_at(&self, expected: usize) -> Result<Card, ShoeError> {
        let mut drawn = self.drawn.lock();
        if *drawn != expected {
            return Err(ShoeError::CursorMismatch {
                expected,
                actual: *drawn,
            });
        }
        let card = *self.cards.get(*drawn).ok_or(ShoeError::Exhausted)?;
        *drawn += 1;
        drop(drawn);

        Ok(card)
    }

    /// Returns the full card sequence, drawn and undrawn.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards handed out so far.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        *self.drawn.lock()
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.drawn_count()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the total number of cards in the shoe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe was built with no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Debug for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shoe")
            .field("len", &self.len())
            .field("drawn_count", &self.drawn_count())
            .finish()
    }
}
