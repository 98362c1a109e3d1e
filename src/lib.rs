//! A Pokémon Blackjack engine with optional `no_std` support.
//!
//! Players add up the HP printed on their cards and try to reach exactly
//! [`TARGET`] (400) without going over, the way blackjack players aim for
//! 21. The dealer draws until reaching [`DEALER_STAND_THRESHOLD`] (300).
//!
//! The crate provides a [`Game`] type that owns one table: the single-use
//! [`Shoe`] built from a card catalog, the seated players, the dealer, and
//! the phase of the round. The rules themselves ([`total`], [`is_goal`],
//! [`is_bust`], [`dealer_should_hit`], [`determine_outcome`]) are plain
//! functions.
//!
//! # Example
//!
//! ```
//! use hpjack::{Card, Game, GameOptions, PlayerId};
//!
//! let catalog = [Card::new(1, 120).unwrap(), Card::new(2, 70).unwrap()];
//! let game = Game::new(GameOptions::default(), &catalog, 42).unwrap();
//!
//! game.join(PlayerId(1), "Ash", 10).unwrap();
//! game.join(PlayerId(2), "Misty", 10).unwrap();
//! game.start().unwrap();
//! game.deal().unwrap();
//!
//! for id in [PlayerId(1), PlayerId(2)] {
//!     if game.get_player(id).is_some_and(|p| p.is_active()) {
//!         game.stand(id).unwrap();
//!     }
//! }
//! game.dealer_play().unwrap();
//! let result = game.showdown().unwrap();
//! assert_eq!(result.players.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod invite;
pub mod options;
pub mod participant;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, CardId, HpCategory};
pub use error::{
    ActionError, DealError, DealerError, JoinError, ShoeError, ShowdownError, SnapshotError,
    StartError,
};
pub use game::{DEALER_STAND_THRESHOLD, Game, GameState, TableSnapshot, dealer_should_hit};
pub use hand::{Hand, TARGET, is_bust, is_goal, total};
pub use invite::generate_invite_code;
pub use options::GameOptions;
pub use participant::{Participant, PlayerId, Role, all_standing};
pub use result::{Outcome, PlayerResult, RoundResult, determine_outcome};
pub use shoe::{SHOE_SIZE, Shoe, ShoeSnapshot};
