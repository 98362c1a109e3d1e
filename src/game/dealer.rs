use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DealerError, ShowdownError};
use crate::hand::{is_bust, is_goal};
use crate::participant::{Participant, all_standing};
use crate::result::{PlayerResult, RoundResult, determine_outcome};

use super::{Game, GameState};

/// The dealer keeps drawing while below this total.
pub const DEALER_STAND_THRESHOLD: u32 = 300;

/// Returns whether the dealer must draw another card at `dealer_total`.
#[must_use]
pub const fn dealer_should_hit(dealer_total: u32) -> bool {
    dealer_total < DEALER_STAND_THRESHOLD
}

fn tally(players: &[Participant], dealer: &Participant) -> RoundResult {
    let dealer_total = dealer.total();

    let players = players
        .iter()
        .filter_map(|player| {
            let player_id = player.player_id()?;
            let player_total = player.total();
            Some(PlayerResult {
                player_id,
                name: String::from(player.name()),
                outcome: determine_outcome(player_total, dealer_total),
                player_total,
                dealer_total,
                stake: player.stake(),
            })
        })
        .collect();

    RoundResult {
        players,
        dealer_total,
        dealer_bust: is_bust(dealer_total),
        dealer_goal: is_goal(dealer_total),
    }
}

impl Game {
    fn ensure_dealer_turn(&self, state: GameState) -> Result<(), DealerError> {
        if state != GameState::InProgress || !self.is_dealt() {
            return Err(DealerError::InvalidState);
        }
        if !self.all_standing() {
            return Err(DealerError::PlayersNotStanding);
        }
        if self.dealer.lock().is_standing() {
            return Err(DealerError::AlreadyStanding);
        }

        Ok(())
    }

    /// Dealer plays their hand according to the auto-play policy.
    ///
    /// The dealer draws one card at a time while below
    /// [`DEALER_STAND_THRESHOLD`], then stands. Running out of cards ends the
    /// draw early; the round still resolves with the dealer's current total.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or not yet dealt, a
    /// player is still active, or the dealer has already played.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn dealer_play(&self) -> Result<Vec<Card>, DealerError> {
        let state = self.state.lock();
        self.ensure_dealer_turn(*state)?;

        let mut dealer = self.dealer.lock();
        let mut drawn_cards = Vec::new();

        while dealer_should_hit(dealer.total()) {
            let Ok(card) = self.shoe.draw() else {
                tracing::warn!(
                    invite_code = %self.invite_code,
                    dealer_total = dealer.total(),
                    "shoe exhausted during dealer play, dealer stands"
                );
                break;
            };
            dealer.take_card(card);
            drawn_cards.push(card);
        }

        dealer.stand();
        tracing::info!(
            invite_code = %self.invite_code,
            dealer_total = dealer.total(),
            drawn = drawn_cards.len(),
            "dealer stands"
        );

        Ok(drawn_cards)
    }

    /// Dealer action: draw one card outside the auto-play loop.
    ///
    /// The same threshold policy applies as in [`Game::dealer_play`], but an
    /// empty shoe is reported to the caller. The dealer does not stand
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or not yet dealt, a
    /// player is still active, the dealer has already played, the dealer's
    /// total has reached [`DEALER_STAND_THRESHOLD`], or the shoe is exhausted.
    pub fn dealer_hit(&self) -> Result<Card, DealerError> {
        let state = self.state.lock();
        self.ensure_dealer_turn(*state)?;

        let mut dealer = self.dealer.lock();
        if !dealer_should_hit(dealer.total()) {
            return Err(DealerError::InvalidAction);
        }

        let card = self
            .shoe
            .draw()
            .map_err(|_| DealerError::ShoeExhausted)?;
        let total = dealer.take_card(card);
        drop(dealer);
        drop(state);
        tracing::debug!(card = %card.id, hp = card.hp(), total, "dealer hit");

        Ok(card)
    }

    /// Compares each player's hand to the dealer's and finishes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress, a player is still
    /// active, or the dealer has not played out the hand.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn showdown(&self) -> Result<RoundResult, ShowdownError> {
        let mut state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(ShowdownError::InvalidState);
        }

        let players = self.players.lock();
        if !all_standing(&players) {
            return Err(ShowdownError::PlayersNotStanding);
        }

        let dealer = self.dealer.lock();
        if !dealer.is_standing() {
            return Err(ShowdownError::DealerNotFinished);
        }

        let result = tally(&players, &dealer);
        *state = GameState::Finished;

        tracing::info!(
            invite_code = %self.invite_code,
            dealer_total = result.dealer_total,
            winners = result.winners().len(),
            "round finished"
        );

        Ok(result)
    }

    /// Re-derives the round result once the round has finished.
    ///
    /// Returns `None` while the round is still open.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn results(&self) -> Option<RoundResult> {
        let state = self.state.lock();
        if *state != GameState::Finished {
            return None;
        }

        let players = self.players.lock();
        let dealer = self.dealer.lock();
        Some(tally(&players, &dealer))
    }
}
