//! Core types: players, per-player storage, RNG and round state.

pub mod player;
pub mod rng;
pub mod state;

pub use player::{Hand, Player, PlayerId, PlayerMap, TurnAction, HAND_SIZE};
pub use rng::GameRng;
pub use state::GameState;
