//! Card resolution.
//!
//! - `CardResolver`: applies a card to the acting player's hand, following
//!   chained reveals, and executes whole turns
//! - `strongest_opponent`: Skip and Do-Not-Disturb target selection
//!
//! Resolution borrows the round's piles, the roster and the match RNG through
//! `ResolverContext`; nothing is global.

mod resolver;
mod targeting;

pub use resolver::{CardResolver, Resolution, ResolverContext};
pub use targeting::{strongest_opponent, TargetFilter};
