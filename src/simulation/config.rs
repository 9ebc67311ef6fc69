//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::core::HAND_SIZE;
use crate::error::ConfigError;

/// Configuration for a batch of matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seats at the table.
    pub players: usize,

    /// Independent matches to run.
    pub matches: usize,

    /// Worker threads. `None` = available hardware parallelism.
    pub workers: Option<usize>,

    /// Starting hand size for every seat.
    pub hand_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            players: 6,
            matches: 100_000,
            workers: None,
            hand_size: HAND_SIZE,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Set the number of matches.
    pub fn with_matches(mut self, matches: usize) -> Self {
        self.matches = matches;
        self
    }

    /// Pin the worker count instead of using hardware parallelism.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the starting hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Reject configurations that cannot produce a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        if self.hand_size > HAND_SIZE {
            return Err(ConfigError::HandTooLarge {
                hand_size: self.hand_size,
                max: HAND_SIZE,
            });
        }
        if self.players * self.hand_size > DECK_SIZE {
            return Err(ConfigError::TooManyPlayers {
                players: self.players,
                hand_size: self.hand_size,
                deck_size: DECK_SIZE,
            });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// Threads to spawn: never more than there are matches, never zero.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        let workers = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        workers.min(self.matches).max(1)
    }
}
