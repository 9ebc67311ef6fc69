//! Card resolution - applying a card to the acting player's hand.
//!
//! Resolution is a loop over "the next card to resolve". Revealing a hand
//! slot uncovers the card that was face-down there, and that card is resolved
//! next, until some card ends on the discard pile or is held by an opponent
//! as a pending skip.
//!
//! Each step discards at most the card it resolved, never the card that
//! uncovered it.

use tracing::{debug, trace};

use crate::cards::{Card, CardKind};
use crate::core::{GameRng, GameState, Player, PlayerId, PlayerMap, TurnAction};
use crate::error::GameError;

use super::targeting::{strongest_opponent, TargetFilter};

/// Everything a resolution step may touch.
///
/// The match owns the roster exclusively; the resolver borrows it along with
/// the round's piles and the match's RNG.
pub struct ResolverContext<'a> {
    pub state: &'a mut GameState,
    pub players: &'a mut PlayerMap<Player>,
    pub rng: &'a mut GameRng,
}

impl<'a> ResolverContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        players: &'a mut PlayerMap<Player>,
        rng: &'a mut GameRng,
    ) -> Self {
        Self { state, players, rng }
    }
}

/// Result of resolving a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The card now sits in a hand slot; the card it uncovered comes next.
    Placed { uncovered: Card },
    /// The card is discarded; the card it fished out of the discards comes next.
    Scavenged { found: Card },
    /// An opponent holds the card until their next turn.
    Held,
    /// The card is discarded.
    Discarded,
}

impl Resolution {
    /// Whether the resolved card goes onto the discard pile.
    #[must_use]
    pub fn discards_played(self) -> bool {
        matches!(self, Resolution::Scavenged { .. } | Resolution::Discarded)
    }

    /// The chained card to resolve next, if any.
    #[must_use]
    pub fn next_card(self) -> Option<Card> {
        match self {
            Resolution::Placed { uncovered } => Some(uncovered),
            Resolution::Scavenged { found } => Some(found),
            Resolution::Held | Resolution::Discarded => None,
        }
    }
}

/// Resolves cards and turns.
pub struct CardResolver;

impl CardResolver {
    /// Play one turn for `actor`.
    pub fn take_turn(actor: PlayerId, ctx: &mut ResolverContext) -> Result<TurnAction, GameError> {
        let action = ctx.players[actor].decide(ctx.state.peek_discard());
        Self::execute(action, actor, ctx)?;
        Ok(action)
    }

    /// Carry out a decided turn action for `actor`.
    ///
    /// `TakeDiscard` requires a non-empty discard pile.
    pub fn execute(
        action: TurnAction,
        actor: PlayerId,
        ctx: &mut ResolverContext,
    ) -> Result<(), GameError> {
        match action {
            TurnAction::ServeSkip => {
                debug!(player = actor.0, "skipped");
                ctx.players[actor].pending_skip = false;
                ctx.state.discard(Card::new(CardKind::Skip));
            }
            TurnAction::TakeDiscard => match ctx.state.take_discard() {
                Some(card) => Self::play(card, actor, ctx),
                None => {
                    debug_assert!(false, "took from an empty discard pile");
                    trace!(player = actor.0, "discard pile empty, turn passes");
                }
            },
            TurnAction::DrawFromDeck => {
                let card = ctx.state.take_deck(ctx.rng)?;
                Self::play(card, actor, ctx);
            }
        }

        Ok(())
    }

    /// Resolve `card` and every card it chains into.
    pub fn play(card: Card, actor: PlayerId, ctx: &mut ResolverContext) {
        let mut next = Some(card);
        while let Some(card) = next {
            trace!(player = actor.0, card = %card, "playing");
            let resolution = Self::resolve_single(card, actor, ctx);
            if resolution.discards_played() {
                ctx.state.discard(card.show());
            }
            next = resolution.next_card();
        }
    }

    /// Resolve exactly one card without following the chain.
    pub fn resolve_single(card: Card, actor: PlayerId, ctx: &mut ResolverContext) -> Resolution {
        match card.kind {
            CardKind::One
            | CardKind::Two
            | CardKind::Three
            | CardKind::Four
            | CardKind::Five
            | CardKind::Six => Self::place_number(card, &mut ctx.players[actor]),
            CardKind::Wild => Self::place_wild(card, &mut ctx.players[actor]),
            CardKind::Racoon => Self::scavenge(actor, ctx),
            CardKind::Giraffe | CardKind::Elephant => Resolution::Discarded,
            CardKind::Skip => Self::skip_opponent(actor, ctx),
            CardKind::DoNotDisturb => Self::disturb_opponent(actor, ctx),
        }
    }

    /// Numbered card: reveal its own slot if that slot is hidden or shows a Wild.
    fn place_number(card: Card, player: &mut Player) -> Resolution {
        let Some(slot) = card.number() else {
            return Resolution::Discarded;
        };
        match player.hand.get(slot).copied() {
            Some(occupant) if occupant.is_hidden() || occupant.is_revealed_wild() => {
                player.hand[slot] = card.show();
                Resolution::Placed {
                    uncovered: occupant.show(),
                }
            }
            _ => Resolution::Discarded,
        }
    }

    /// Wild: cover the first hidden slot.
    fn place_wild(card: Card, player: &mut Player) -> Resolution {
        match player.first_hidden_slot() {
            Some(slot) => {
                let occupant = player.hand[slot];
                player.hand[slot] = card.show();
                Resolution::Placed {
                    uncovered: occupant.show(),
                }
            }
            None => Resolution::Discarded,
        }
    }

    /// Racoon: take the oldest discard that fills one of the actor's hidden slots.
    fn scavenge(actor: PlayerId, ctx: &mut ResolverContext) -> Resolution {
        let player = &ctx.players[actor];
        match ctx.state.discard_pile.iter().position(|c| player.wants(*c)) {
            Some(index) => {
                let found = ctx.state.discard_pile.remove(index);
                debug!(player = actor.0, card = %found, "racoon takes discard");
                Resolution::Scavenged { found }
            }
            None => Resolution::Discarded,
        }
    }

    /// Skip: the strongest opponent holds the card and loses their next turn.
    fn skip_opponent(actor: PlayerId, ctx: &mut ResolverContext) -> Resolution {
        let Some(target) =
            strongest_opponent(ctx.players, actor, TargetFilter::AnyOpponent, ctx.rng)
        else {
            return Resolution::Discarded;
        };

        let opponent = &mut ctx.players[target];
        if opponent.pending_skip {
            debug!(player = actor.0, target = target.0, "target already skipped");
            return Resolution::Discarded;
        }
        opponent.pending_skip = true;
        debug!(player = actor.0, target = target.0, "skipping");
        Resolution::Held
    }

    /// Do-Not-Disturb: hide the strongest opponent's highest revealed slot.
    fn disturb_opponent(actor: PlayerId, ctx: &mut ResolverContext) -> Resolution {
        let target =
            strongest_opponent(ctx.players, actor, TargetFilter::RevealedOpponent, ctx.rng);

        if let Some(target) = target {
            let opponent = &mut ctx.players[target];
            if let Some(slot) = opponent.highest_visible_slot() {
                opponent.hand[slot] = opponent.hand[slot].hide();
                debug!(player = actor.0, target = target.0, slot, "do not disturb");
            }
        }
        Resolution::Discarded
    }
}
