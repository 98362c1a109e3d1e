//! Players and the dealer.

use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::hand::{Hand, is_bust, is_goal};

/// Opaque identity of a player, assigned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", tag = "kind"))]
pub enum Role {
    /// A player acting by choice.
    Player {
        /// The player's identity.
        id: PlayerId,
        /// Amount staked on the round. Passed through untouched.
        stake: usize,
    },
    /// The house, governed by the auto-play policy.
    Dealer,
}

/// A seat at the table: a hand plus whether it has stopped drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    role: Role,
    name: String,
    hand: Hand,
    standing: bool,
}

impl Participant {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn player(id: PlayerId, name: impl Into<String>, stake: usize) -> Self {
        Self {
            role: Role::Player { id, stake },
            name: name.into(),
            hand: Hand::new(),
            standing: false,
        }
    }

    /// Creates the dealer with an empty hand.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            name: String::from("Dealer"),
            hand: Hand::new(),
            standing: false,
        }
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the player id, or `None` for the dealer.
    #[must_use]
    pub const fn player_id(&self) -> Option<PlayerId> {
        match self.role {
            Role::Player { id, .. } => Some(id),
            Role::Dealer => None,
        }
    }

    /// Returns the stake. The dealer never stakes anything.
    #[must_use]
    pub const fn stake(&self) -> usize {
        match self.role {
            Role::Player { stake, .. } => stake,
            Role::Dealer => 0,
        }
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the current HP total of the hand.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.hand.total()
    }

    /// Returns whether the participant has stopped drawing.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Returns whether the participant may still hit or stand.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.standing
    }

    /// Adds a drawn card and returns the new total.
    ///
    /// A player whose total reaches a goal or busts stands automatically.
    /// The dealer keeps drawing under the auto-play policy instead.
    pub fn take_card(&mut self, card: Card) -> u32 {
        self.hand.add_card(card);
        let total = self.hand.total();
        if !self.is_dealer() && (is_goal(total) || is_bust(total)) {
            self.standing = true;
        }
        total
    }

    /// Stops drawing for the rest of the round.
    pub const fn stand(&mut self) {
        self.standing = true;
    }
}

/// Returns whether every player has stopped drawing.
///
/// Vacuously true for an empty table.
#[must_use]
pub fn all_standing(players: &[Participant]) -> bool {
    players.iter().all(Participant::is_standing)
}
