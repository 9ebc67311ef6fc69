//! The fixed 52-card deck.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::core::rng::GameRng;

/// Deck composition in build order.
pub const DECK_COMPOSITION: [(CardKind, usize); 12] = [
    (CardKind::One, 6),
    (CardKind::Two, 6),
    (CardKind::Three, 6),
    (CardKind::Four, 6),
    (CardKind::Five, 6),
    (CardKind::Six, 6),
    (CardKind::Wild, 4),
    (CardKind::Giraffe, 3),
    (CardKind::Elephant, 3),
    (CardKind::Skip, 4),
    (CardKind::DoNotDisturb, 2),
    (CardKind::Racoon, 3),
];

/// Total cards in a full deck.
pub const DECK_SIZE: usize = deck_size();

const fn deck_size() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < DECK_COMPOSITION.len() {
        total += DECK_COMPOSITION[i].1;
        i += 1;
    }
    total
}

/// An ordered pile of cards. Index 0 is the front (next card drawn).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck, face-up, in `DECK_COMPOSITION` order.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for (kind, count) in DECK_COMPOSITION {
            cards.extend(std::iter::repeat(Card::new(kind)).take(count));
        }
        Self { cards }
    }

    /// Full deck in random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Uniform in-place permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copies of `kind` in the pile, any visibility.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind == kind).count()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
