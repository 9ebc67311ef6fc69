//! Match driver: rounds until one seat empties its hand.
//!
//! Each round deals a fresh deck, then seats take turns starting from a
//! random seat. Before every turn the current seat is checked: if all their
//! slots are revealed they win the round and lose their lowest slot. The
//! first seat to lose its last slot wins the match.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameRng, GameState, Player, PlayerId, PlayerMap};
use crate::effects::{CardResolver, ResolverContext};
use crate::error::GameError;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    /// Rounds played, including the winning one.
    pub rounds: u64,
    /// Turns taken across all rounds.
    pub turns: u64,
}

/// Runs one match. Owns the roster and the match's random stream.
pub struct MatchRunner {
    players: PlayerMap<Player>,
    rng: GameRng,
    rounds: u64,
    turns: u64,
}

impl MatchRunner {
    /// A fresh table of `player_count` seats holding `hand_size` slots each.
    pub fn new(player_count: usize, hand_size: usize, rng: GameRng) -> Self {
        Self::with_players(PlayerMap::new(player_count, |id| Player::new(id, hand_size)), rng)
    }

    /// Start from an existing roster.
    pub fn with_players(players: PlayerMap<Player>, rng: GameRng) -> Self {
        Self {
            players,
            rng,
            rounds: 0,
            turns: 0,
        }
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Play rounds until a seat's hand is empty.
    pub fn run(mut self) -> Result<MatchOutcome, GameError> {
        trace!(seed = self.rng.seed(), players = self.players.player_count(), "starting match");
        loop {
            let state = GameState::new_round(&mut self.players, &mut self.rng)?;
            let winner = self.play_dealt_round(state)?;
            if self.finish_round(winner) {
                debug!(winner = winner.0, rounds = self.rounds, turns = self.turns, "match won");
                return Ok(MatchOutcome {
                    winner,
                    rounds: self.rounds,
                    turns: self.turns,
                });
            }
        }
    }

    /// Take turns on an already dealt round until the seat about to act has
    /// revealed every slot. Returns that seat.
    pub fn play_dealt_round(&mut self, mut state: GameState) -> Result<PlayerId, GameError> {
        let player_count = self.players.player_count();
        let mut seat = PlayerId::new(self.rng.gen_range_usize(0..player_count) as u8);

        while !self.players[seat].is_round_done() {
            self.turns += 1;
            let mut ctx = ResolverContext::new(&mut state, &mut self.players, &mut self.rng);
            CardResolver::take_turn(seat, &mut ctx)?;
            seat = seat.next(player_count);
        }

        Ok(seat)
    }

    /// Count the round and trim the winner's hand. True when the match is won.
    pub fn finish_round(&mut self, winner: PlayerId) -> bool {
        self.rounds += 1;
        debug!(winner = winner.0, round = self.rounds, "round won");
        self.players[winner].trim_hand()
    }
}
