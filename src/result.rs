//! Round outcomes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{is_bust, is_goal};
use crate::participant::PlayerId;

/// Result of a player's hand against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Outcome {
    /// Player wins (dealer busts, player hits the goal, or player has more HP).
    Win,
    /// Player loses (player busts, dealer hits the goal, or dealer has more HP).
    Loss,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns the outcome seen from the other side of the table.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Push => Self::Push,
        }
    }
}

/// Decides a player's final total against the dealer's.
///
/// Rules are tried in order and the first match wins. A busted player loses
/// even when the dealer busts too.
///
/// ```
/// use hpjack::{Outcome, determine_outcome};
///
/// assert_eq!(determine_outcome(400, 380), Outcome::Win);
/// assert_eq!(determine_outcome(410, 500), Outcome::Loss);
/// assert_eq!(determine_outcome(300, 300), Outcome::Push);
/// ```
#[must_use]
pub const fn determine_outcome(player_total: u32, dealer_total: u32) -> Outcome {
    let player_goal = is_goal(player_total);
    let dealer_goal = is_goal(dealer_total);

    if is_bust(player_total) {
        Outcome::Loss
    } else if is_bust(dealer_total) {
        Outcome::Win
    } else if player_goal && !dealer_goal {
        Outcome::Win
    } else if dealer_goal && !player_goal {
        Outcome::Loss
    } else if player_total > dealer_total {
        Outcome::Win
    } else if dealer_total > player_total {
        Outcome::Loss
    } else {
        Outcome::Push
    }
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: PlayerId,
    /// The player's display name.
    pub name: String,
    /// The outcome of the player's hand.
    pub outcome: Outcome,
    /// The player's final HP total.
    pub player_total: u32,
    /// The dealer's final HP total.
    pub dealer_total: u32,
    /// The stake the player joined with.
    pub stake: usize,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each player, in seating order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final HP total.
    pub dealer_total: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer hit the goal exactly.
    pub dealer_goal: bool,
}

impl RoundResult {
    /// Returns the ids of the players who beat the dealer.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|result| result.outcome == Outcome::Win)
            .map(|result| result.player_id)
            .collect()
    }

    /// Returns the result for `player_id`, if that player took part.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerResult> {
        self.players
            .iter()
            .find(|result| result.player_id == player_id)
    }
}
