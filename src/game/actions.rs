use crate::card::Card;
use crate::error::ActionError;
use crate::participant::{Participant, PlayerId};

use super::{Game, GameState};

impl Game {
    fn ensure_dealt_round(&self, state: GameState) -> Result<(), ActionError> {
        if state != GameState::InProgress || !self.is_dealt() {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    fn with_active_player<T>(
        &self,
        player_id: PlayerId,
        action: impl FnOnce(&mut Participant) -> Result<T, ActionError>,
    ) -> Result<T, ActionError> {
        let state = self.state.lock();
        self.ensure_dealt_round(*state)?;

        let mut players = self.players.lock();
        let player = players
            .iter_mut()
            .find(|player| player.player_id() == Some(player_id))
            .ok_or(ActionError::PlayerNotFound)?;

        if !player.is_active() {
            return Err(ActionError::InvalidAction);
        }

        let result = action(player);
        drop(players);
        drop(state);
        result
    }

    /// Player action: Hit (draw a card).
    ///
    /// A player who reaches the goal or busts stands automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or not yet dealt, the
    /// player cannot be found, the player is already standing, or the shoe is
    /// exhausted.
    pub fn hit(&self, player_id: PlayerId) -> Result<Card, ActionError> {
        self.with_active_player(player_id, |player| {
            let card = self
                .shoe
                .draw()
                .map_err(|_| ActionError::ShoeExhausted)?;
            let total = player.take_card(card);
            tracing::debug!(
                player = %player_id,
                card = %card.id,
                hp = card.hp(),
                total,
                standing = player.is_standing(),
                "player hit"
            );
            Ok(card)
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in progress or not yet dealt, the
    /// player cannot be found, or the player is already standing.
    pub fn stand(&self, player_id: PlayerId) -> Result<(), ActionError> {
        self.with_active_player(player_id, |player| {
            player.stand();
            tracing::debug!(player = %player_id, total = player.total(), "player stood");
            Ok(())
        })
    }
}
