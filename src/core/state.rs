//! Round state: the draw pile and the discard pile.
//!
//! A `GameState` lives for exactly one round. `new_round` builds and shuffles
//! a fresh deck and redeals every existing hand slot face-down; players keep
//! their hand sizes between rounds.
//!
//! The player roster is owned by the match and passed alongside the state,
//! never stored in it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::player::{Player, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Deck};
use crate::error::GameError;

/// Piles for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-up unknown cards; the front is drawn next.
    pub draw_pile: Deck,
    /// Discard stack; the last element is the top.
    pub discard_pile: Vec<Card>,
}

impl GameState {
    /// State with the given draw pile and an empty discard pile.
    #[must_use]
    pub fn with_draw_pile(draw_pile: impl Into<Deck>) -> Self {
        Self {
            draw_pile: draw_pile.into(),
            discard_pile: Vec::new(),
        }
    }

    /// Shuffle a fresh deck and deal every hand slot face-down, in seat order
    /// then slot order.
    ///
    /// Pending skips are cleared: the held Skip went back into the new deck.
    pub fn new_round(players: &mut PlayerMap<Player>, rng: &mut GameRng) -> Result<Self, GameError> {
        let mut draw_pile = Deck::shuffled(rng);
        let needed: usize = players.values().map(Player::hand_size).sum();

        for (_, player) in players.iter_mut() {
            player.pending_skip = false;
            for slot in player.hand.iter_mut() {
                *slot = draw_pile
                    .draw()
                    .ok_or(GameError::DeckExhausted { needed })?
                    .hide();
            }
        }

        trace!(dealt = needed, remaining = draw_pile.len(), "dealt new round");
        Ok(Self::with_draw_pile(draw_pile))
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn peek_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    /// Remove and return the top of the discard pile.
    pub fn take_discard(&mut self) -> Option<Card> {
        self.discard_pile.pop()
    }

    /// Remove and return the front of the draw pile.
    ///
    /// An empty draw pile is replaced by the discard pile, shuffled.
    pub fn take_deck(&mut self, rng: &mut GameRng) -> Result<Card, GameError> {
        if self.draw_pile.is_empty() {
            trace!(cards = self.discard_pile.len(), "reshuffling discards into draw pile");
            self.draw_pile = Deck::from(std::mem::take(&mut self.discard_pile));
            self.draw_pile.shuffle(rng);
        }
        self.draw_pile.draw().ok_or(GameError::PilesExhausted)
    }

    /// Put a card on top of the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Cards on both piles, in every hand slot, and held as pending skips.
    #[must_use]
    pub fn card_count(&self, players: &PlayerMap<Player>) -> usize {
        let held: usize = players
            .values()
            .map(|p| p.hand_size() + usize::from(p.pending_skip))
            .sum();
        self.draw_pile.len() + self.discard_pile.len() + held
    }
}
