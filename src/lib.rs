//! # too-many-monkeys
//!
//! Monte-Carlo estimate of each seat's chance to win a game of
//! Too Many Monkeys.
//!
//! ## Game
//!
//! Every seat holds a row of face-down slots. A numbered card `N` always
//! targets slot `N`: revealing it uncovers the card underneath, which is
//! played next, and so on down the chain. The first seat to reveal its whole
//! row wins the round and loses its lowest slot; the first seat with no slots
//! left wins the match.
//!
//! ## Modules
//!
//! - `cards`: Card kinds, visibility, the 52-card deck
//! - `core`: Players, per-player storage, RNG, round piles
//! - `effects`: Card resolution and opponent targeting
//! - `simulation`: Match driver and the parallel harness
//! - `error`: Configuration and invariant errors

pub mod cards;
pub mod core;
pub mod effects;
pub mod error;
pub mod simulation;

// Re-export commonly used types
pub use crate::cards::{Card, CardKind, Deck, DECK_SIZE};
pub use crate::core::{GameRng, GameState, Player, PlayerId, PlayerMap, TurnAction};
pub use crate::effects::{CardResolver, ResolverContext};
pub use crate::error::{ConfigError, GameError, SimError};
pub use crate::simulation::{
    MatchOutcome, MatchRunner, Simulation, SimulationConfig, SimulationSummary, SimulationTally,
};
