//! Game engine and state management.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::error::{ShoeError, SnapshotError};
use crate::invite::generate_invite_code;
use crate::options::GameOptions;
use crate::participant::{self, Participant, PlayerId};
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;
mod table;

pub use dealer::{DEALER_STAND_THRESHOLD, dealer_should_hit};
pub use state::{GameState, TableSnapshot};

/// A single Pokémon Blackjack table: its players, the dealer, and the shoe
/// they all draw from.
///
/// Every mutating call takes the phase lock first and holds it until the
/// call returns, so operations on one table never interleave. The shoe
/// serializes its own draws as well.
pub struct Game {
    /// Table options.
    pub options: GameOptions,
    invite_code: String,
    shoe: Shoe,
    state: Mutex<GameState>,
    /// Seated players in joining order.
    players: Mutex<Vec<Participant>>,
    dealer: Mutex<Participant>,
}

impl Game {
    /// Creates a table whose shoe is drawn from `catalog` with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyCatalog`] if `catalog` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use hpjack::{Card, Game, GameOptions, GameState};
    ///
    /// let catalog = [Card::new(1, 120).unwrap(), Card::new(2, 90).unwrap()];
    /// let game = Game::new(GameOptions::default(), &catalog, 42).unwrap();
    /// assert_eq!(game.state(), GameState::Waiting);
    /// assert_eq!(game.cards_remaining(), 208);
    /// ```
    pub fn new(options: GameOptions, catalog: &[Card], seed: u64) -> Result<Self, ShoeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, catalog, &mut rng)
    }

    /// Creates a table drawing its shoe and invite code from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::EmptyCatalog`] if `catalog` is empty.
    pub fn with_rng<R: Rng>(
        options: GameOptions,
        catalog: &[Card],
        rng: &mut R,
    ) -> Result<Self, ShoeError> {
        let shoe = Shoe::new(catalog, options.shoe_size, rng)?;
        let invite_code = generate_invite_code(rng);
        tracing::info!(invite_code = %invite_code, "table created");

        Ok(Self::with_shoe(options, shoe, invite_code))
    }

    /// Creates a table around an already built shoe.
    #[must_use]
    pub fn with_shoe(options: GameOptions, shoe: Shoe, invite_code: impl Into<String>) -> Self {
        Self {
            options,
            invite_code: invite_code.into(),
            shoe,
            state: Mutex::new(GameState::Waiting),
            players: Mutex::new(Vec::new()),
            dealer: Mutex::new(Participant::dealer()),
        }
    }

    /// Rebuilds a table from a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Shoe`] if the shoe cursor is past the end of
    /// the shoe. Seats are checked as well: the dealer slot must hold the
    /// dealer, every player slot a player with a unique id, and no more
    /// players than `max_players` may be seated.
    pub fn from_snapshot(snapshot: TableSnapshot) -> Result<Self, SnapshotError> {
        let TableSnapshot {
            options,
            invite_code,
            state,
            players,
            dealer,
            shoe,
        } = snapshot;

        if !dealer.is_dealer() {
            return Err(SnapshotError::DealerSlotHoldsPlayer);
        }
        if players.len() > options.max_players {
            return Err(SnapshotError::TooManyPlayers {
                seated: players.len(),
                max: options.max_players,
            });
        }
        let mut seen = BTreeSet::new();
        for player in &players {
            let player_id = player
                .player_id()
                .ok_or(SnapshotError::PlayerSlotHoldsDealer)?;
            if !seen.insert(player_id) {
                return Err(SnapshotError::DuplicatePlayer(player_id));
            }
        }

        let shoe = Shoe::restore(shoe)?;
        tracing::debug!(invite_code = %invite_code, players = players.len(), "table restored");

        Ok(Self {
            options,
            invite_code,
            shoe,
            state: Mutex::new(state),
            players: Mutex::new(players),
            dealer: Mutex::new(dealer),
        })
    }

    /// Captures the table for persistence.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held so the snapshot is consistent"
    )]
    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.state.lock();
        let players = self.players.lock();
        let dealer = self.dealer.lock();

        TableSnapshot {
            options: self.options,
            invite_code: self.invite_code.clone(),
            state: *state,
            players: players.clone(),
            dealer: dealer.clone(),
            shoe: self.shoe.snapshot(),
        }
    }

    /// Returns the code players use to find this table.
    #[must_use]
    pub fn invite_code(&self) -> &str {
        &self.invite_code
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state.get_cloned()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns a copy of every seated player.
    pub fn players(&self) -> Vec<Participant> {
        self.players.get_cloned()
    }

    /// Returns a copy of the specified player.
    pub fn get_player(&self, player_id: PlayerId) -> Option<Participant> {
        self.players
            .lock()
            .iter()
            .find(|player| player.player_id() == Some(player_id))
            .cloned()
    }

    /// Returns a copy of the dealer.
    pub fn dealer(&self) -> Participant {
        self.dealer.get_cloned()
    }

    /// Returns whether every player is standing.
    pub fn all_standing(&self) -> bool {
        participant::all_standing(&self.players.lock())
    }

    /// Returns whether the initial cards have gone out this round.
    fn is_dealt(&self) -> bool {
        !self.dealer.lock().hand().is_empty()
    }
}
