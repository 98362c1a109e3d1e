//! Error types for shoe and table operations.

use thiserror::Error;

use crate::participant::PlayerId;

/// Errors that can occur when building or drawing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// The catalog holds no cards to build a shoe from.
    #[error("no cards available in the catalog")]
    EmptyCatalog,
    /// Every card in the shoe has been drawn.
    #[error("shoe exhausted")]
    Exhausted,
    /// A restored cursor points past the end of the shoe.
    #[error("cursor {drawn} is past the end of a {len}-card shoe")]
    CursorOutOfRange {
        /// The cursor that was supplied.
        drawn: usize,
        /// Number of cards in the shoe.
        len: usize,
    },
    /// The cursor moved since the caller last read it.
    #[error("expected cursor {expected}, found {actual}")]
    CursorMismatch {
        /// The cursor the caller expected.
        expected: usize,
        /// The cursor actually held by the shoe.
        actual: usize,
    },
}

/// Errors that can occur when joining a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The table is no longer waiting for players.
    #[error("invalid game state for joining")]
    InvalidState,
    /// A player with this id is already seated.
    #[error("player already joined")]
    AlreadyJoined,
    /// Every seat is taken.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The round has already started.
    #[error("invalid game state for starting")]
    InvalidState,
    /// Fewer players than the table minimum.
    #[error("not enough players to start")]
    NotEnoughPlayers,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Cards have already been dealt this round.
    #[error("cards have already been dealt")]
    AlreadyDealt,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The player is already standing.
    #[error("player is not active")]
    InvalidAction,
    /// No cards left in the shoe.
    #[error("shoe exhausted")]
    ShoeExhausted,
}

/// Errors that can occur during the dealer's turn.
///
/// [`PlayersNotStanding`](Self::PlayersNotStanding) means the dealer's turn
/// has not begun. [`InvalidAction`](Self::InvalidAction) means it has, but
/// the dealer's total no longer allows another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
    /// At least one player has not stood yet.
    #[error("players are still active")]
    PlayersNotStanding,
    /// The dealer has already finished drawing.
    #[error("dealer is already standing")]
    AlreadyStanding,
    /// The dealer's total is at or above the stand threshold.
    #[error("dealer must stand at this total")]
    InvalidAction,
    /// No cards left in the shoe.
    #[error("shoe exhausted")]
    ShoeExhausted,
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// At least one player has not stood yet.
    #[error("players are still active")]
    PlayersNotStanding,
    /// The dealer has not played out the hand.
    #[error("dealer has not finished drawing")]
    DealerNotFinished,
}

/// Errors that can occur when restoring a table from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The persisted shoe is inconsistent.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
    /// The dealer slot holds a player.
    #[error("dealer slot holds a player")]
    DealerSlotHoldsPlayer,
    /// A player slot holds a dealer.
    #[error("player slot holds a dealer")]
    PlayerSlotHoldsDealer,
    /// Two seats share the same player id.
    #[error("{0} is seated twice")]
    DuplicatePlayer(PlayerId),
    /// More players are seated than the table options allow.
    #[error("{seated} players seated at a table for {max}")]
    TooManyPlayers {
        /// Number of players in the snapshot.
        seated: usize,
        /// The table's `max_players`.
        max: usize,
    },
}
