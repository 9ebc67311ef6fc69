//! Card system: the card model and the deck.
//!
//! ## Key Types
//!
//! - `CardKind`: Closed set of twelve kinds (six numbered, six special)
//! - `Card`: A kind plus an independent hidden flag
//! - `Deck`: An ordered pile with the fixed 52-card composition

pub mod card;
pub mod deck;

pub use card::{Card, CardKind};
pub use deck::{Deck, DECK_COMPOSITION, DECK_SIZE};
