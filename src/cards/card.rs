//! Card identity and visibility.
//!
//! A `Card` pairs a `CardKind` with an independent `hidden` flag. Cards dealt
//! into a hand start hidden; everything on the piles is face-up.
//!
//! ## Kinds
//!
//! - **Numbered** (`One`..`Six`): a numbered card always targets the hand slot
//!   at `number()`, so `One` targets slot 0 and `Six` targets slot 5.
//! - **Wild**: covers the first hidden slot.
//! - **Racoon**: fishes a useful numbered card out of the discard pile.
//! - **Skip**: makes the strongest opponent lose a turn.
//! - **DoNotDisturb**: hides the strongest opponent's highest revealed slot.
//! - **Giraffe**, **Elephant**: can't come to the party; no effect.

use serde::{Deserialize, Serialize};

/// The closed set of card kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Wild,
    Skip,
    Racoon,
    Giraffe,
    Elephant,
    DoNotDisturb,
}

impl CardKind {
    /// Every kind, numbered kinds first.
    pub const ALL: [CardKind; 12] = [
        CardKind::One,
        CardKind::Two,
        CardKind::Three,
        CardKind::Four,
        CardKind::Five,
        CardKind::Six,
        CardKind::Wild,
        CardKind::Skip,
        CardKind::Racoon,
        CardKind::Giraffe,
        CardKind::Elephant,
        CardKind::DoNotDisturb,
    ];

    /// The numbered kinds in slot order.
    pub const NUMBERS: [CardKind; 6] = [
        CardKind::One,
        CardKind::Two,
        CardKind::Three,
        CardKind::Four,
        CardKind::Five,
        CardKind::Six,
    ];

    /// Hand slot targeted by a numbered kind, `None` for specials.
    #[must_use]
    pub const fn number(self) -> Option<usize> {
        match self {
            CardKind::One => Some(0),
            CardKind::Two => Some(1),
            CardKind::Three => Some(2),
            CardKind::Four => Some(3),
            CardKind::Five => Some(4),
            CardKind::Six => Some(5),
            _ => None,
        }
    }

    /// Numbered kind targeting `slot`, if any.
    #[must_use]
    pub fn from_number(slot: usize) -> Option<CardKind> {
        Self::NUMBERS.get(slot).copied()
    }

    #[must_use]
    pub const fn is_number(self) -> bool {
        self.number().is_some()
    }

    fn label(self) -> &'static str {
        match self {
            CardKind::One => "1",
            CardKind::Two => "2",
            CardKind::Three => "3",
            CardKind::Four => "4",
            CardKind::Five => "5",
            CardKind::Six => "6",
            CardKind::Wild => "W",
            CardKind::Skip => "S",
            CardKind::Racoon => "R",
            CardKind::Giraffe => "G",
            CardKind::Elephant => "E",
            CardKind::DoNotDisturb => "D",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card plus its visibility.
///
/// All operations are pure: they return a new value and the caller writes it
/// back into a hand slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub hidden: bool,
}

impl Card {
    /// A face-up card.
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self { kind, hidden: false }
    }

    /// A face-down card.
    #[must_use]
    pub const fn hidden(kind: CardKind) -> Self {
        Self { kind, hidden: true }
    }

    /// Toggle visibility.
    #[must_use]
    pub const fn flip(self) -> Self {
        Self {
            kind: self.kind,
            hidden: !self.hidden,
        }
    }

    /// Force hidden. No-op if already hidden.
    #[must_use]
    pub const fn hide(self) -> Self {
        Self::hidden(self.kind)
    }

    /// Force visible. No-op if already showing.
    #[must_use]
    pub const fn show(self) -> Self {
        Self::new(self.kind)
    }

    /// True for the six numbered kinds, regardless of visibility.
    #[must_use]
    pub const fn is_number(self) -> bool {
        self.kind.is_number()
    }

    /// Hand slot this card targets, regardless of visibility.
    #[must_use]
    pub const fn number(self) -> Option<usize> {
        self.kind.number()
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.hidden
    }

    /// A revealed Wild, which a numbered card may displace.
    #[must_use]
    pub fn is_revealed_wild(self) -> bool {
        !self.hidden && self.kind == CardKind::Wild
    }
}

impl From<CardKind> for Card {
    fn from(kind: CardKind) -> Self {
        Card::new(kind)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hidden {
            write!(f, "u{}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
