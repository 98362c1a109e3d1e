use alloc::string::String;

use crate::error::{DealError, JoinError, StartError};
use crate::participant::{Participant, PlayerId};

use super::{Game, GameState};

/// Cards each participant receives in the initial deal.
const INITIAL_CARDS: usize = 2;

impl Game {
    /// Seats a player with an empty hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is no longer waiting, the id is already
    /// seated, or every seat is taken.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the phase lock is held for the entire operation"
    )]
    pub fn join(
        &self,
        player_id: PlayerId,
        name: impl Into<String>,
        stake: usize,
    ) -> Result<(), JoinError> {
        let state = self.state.lock();
        if *state != GameState::Waiting {
            return Err(JoinError::InvalidState);
        }

        let mut players = self.players.lock();
        if players
            .iter()
            .any(|player| player.player_id() == Some(player_id))
        {
            return Err(JoinError::AlreadyJoined);
        }
        if players.len() >= self.options.max_players {
            return Err(JoinError::TableFull);
        }

        let player = Participant::player(player_id, name, stake);
        tracing::info!(player = %player_id, name = player.name(), stake, "player joined");
        players.push(player);

        Ok(())
    }

    /// Closes the table to new players and starts the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already started or fewer than
    /// `min_players` are seated.
    pub fn start(&self) -> Result<(), StartError> {
        let mut state = self.state.lock();
        if *state != GameState::Waiting {
            return Err(StartError::InvalidState);
        }

        let player_count = self.player_count();
        if player_count < self.options.min_players {
            return Err(StartError::NotEnoughPlayers);
        }

        *state = GameState::InProgress;
        drop(state);
        tracing::info!(invite_code = %self.invite_code, players = player_count, "round started");

        Ok(())
    }

    /// Deals two cards to every player and to the dealer.
    ///
    /// Cards go out one at a time: each player in joining order, then the
    /// dealer, and the whole pass repeats. A player whose first two cards
    /// reach the goal or bust stands immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, cards have already
    /// been dealt, or the shoe cannot cover the whole deal.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn deal(&self) -> Result<(), DealError> {
        let state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(DealError::InvalidState);
        }

        let mut players = self.players.lock();
        let mut dealer = self.dealer.lock();
        if !dealer.hand().is_empty() || players.iter().any(|player| !player.hand().is_empty()) {
            return Err(DealError::AlreadyDealt);
        }

        let cards_needed = (players.len() + 1) * INITIAL_CARDS;
        if self.shoe.remaining() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..INITIAL_CARDS {
            for player in players.iter_mut() {
                let card = self.shoe.draw().map_err(|_| DealError::NotEnoughCards)?;
                player.take_card(card);
            }

            let card = self.shoe.draw().map_err(|_| DealError::NotEnoughCards)?;
            dealer.take_card(card);
        }

        tracing::info!(
            invite_code = %self.invite_code,
            players = players.len(),
            dealer_total = dealer.total(),
            "initial cards dealt"
        );

        Ok(())
    }
}
