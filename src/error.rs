//! Error types.
//!
//! Every failure here is an internal-consistency or configuration error.
//! Nothing is retried; callers are expected to abort the run.

use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one player is required")]
    NoPlayers,
    #[error("hand size must be at least 1")]
    EmptyHand,
    #[error("hand size {hand_size} exceeds {max}: numbered cards only reach the first {max} slots")]
    HandTooLarge { hand_size: usize, max: usize },
    #[error("{players} players with {hand_size} cards each need more than the {deck_size} cards in the deck")]
    TooManyPlayers {
        players: usize,
        hand_size: usize,
        deck_size: usize,
    },
    #[error("worker count must be at least 1")]
    NoWorkers,
}

/// Broken game invariant. Signals a dealing or resolution bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("deck ran out while dealing {needed} hand slots")]
    DeckExhausted { needed: usize },
    #[error("draw pile and discard pile are both empty")]
    PilesExhausted,
}

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("match {index} failed: {source}")]
    Match {
        index: usize,
        #[source]
        source: GameError,
    },
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
}
