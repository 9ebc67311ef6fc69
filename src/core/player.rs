//! Players, player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A seat's hand of card slots plus its pending-skip flag. Slot `N` is the
//! slot a numbered card with `number() == N` always targets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{Card, CardKind};

/// Starting hand size.
pub const HAND_SIZE: usize = 6;

/// Hand slots, lowest index first.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// Seat identifier supporting 1-255 players.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use too_many_monkeys::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use too_many_monkeys::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u64> = PlayerMap::with_value(4, 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// What a player does with their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Skipped: discard the held Skip and do nothing else.
    ServeSkip,
    /// Take the top of the discard pile and play it.
    TakeDiscard,
    /// Draw from the deck and play it.
    DrawFromDeck,
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Hand,
    /// A Skip was played against this player; they discard it next turn.
    pub pending_skip: bool,
}

impl Player {
    /// A player with `hand_size` face-down slots, ready to be dealt.
    #[must_use]
    pub fn new(id: PlayerId, hand_size: usize) -> Self {
        Self {
            id,
            hand: std::iter::repeat(Card::hidden(CardKind::One))
                .take(hand_size)
                .collect(),
            pending_skip: false,
        }
    }

    /// A player holding exactly `cards`.
    #[must_use]
    pub fn with_hand(id: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            hand: cards.into_iter().collect(),
            pending_skip: false,
        }
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hand.iter().filter(|c| c.is_hidden()).count()
    }

    /// Number of revealed slots.
    #[must_use]
    pub fn power(&self) -> usize {
        self.hand_size() - self.hidden_count()
    }

    /// Every slot is revealed.
    #[must_use]
    pub fn is_round_done(&self) -> bool {
        self.hand.iter().all(|c| !c.is_hidden())
    }

    /// Highest-indexed revealed slot.
    #[must_use]
    pub fn highest_visible_slot(&self) -> Option<usize> {
        self.hand.iter().rposition(|c| !c.is_hidden())
    }

    /// First hidden slot.
    #[must_use]
    pub fn first_hidden_slot(&self) -> Option<usize> {
        self.hand.iter().position(|c| c.is_hidden())
    }

    /// `card` is numbered and its slot exists and is still hidden.
    #[must_use]
    pub fn wants(&self, card: Card) -> bool {
        card.number()
            .and_then(|slot| self.hand.get(slot))
            .is_some_and(|slot| slot.is_hidden())
    }

    /// Decide this turn's action given the top of the discard pile.
    #[must_use]
    pub fn decide(&self, top_of_discard: Option<Card>) -> TurnAction {
        if self.pending_skip {
            TurnAction::ServeSkip
        } else if top_of_discard.is_some_and(|card| self.wants(card)) {
            TurnAction::TakeDiscard
        } else {
            TurnAction::DrawFromDeck
        }
    }

    /// Drop the lowest-indexed slot after a round win.
    ///
    /// Returns true once the hand is empty and the match is won.
    pub fn trim_hand(&mut self) -> bool {
        if !self.hand.is_empty() {
            self.hand.remove(0);
        }
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &[Card]) -> Player {
        Player::with_hand(PlayerId::new(0), cards.iter().copied())
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
        assert_eq!(map.values().sum::<i32>(), 3);
        assert_eq!(
            map.player_ids().collect::<Vec<_>>(),
            PlayerId::all(3).collect::<Vec<_>>()
        );
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }

    #[test]
    fn test_new_player_is_face_down() {
        let player = Player::new(PlayerId::new(2), HAND_SIZE);
        assert_eq!(player.hand_size(), 6);
        assert_eq!(player.hidden_count(), 6);
        assert_eq!(player.power(), 0);
        assert!(!player.is_round_done());
        assert!(!player.pending_skip);
    }

    #[test]
    fn test_power_counts_visible_slots() {
        let p = hand(&[
            Card::new(CardKind::One),
            Card::hidden(CardKind::Skip),
            Card::new(CardKind::Wild),
        ]);
        assert_eq!(p.power(), 2);
        assert_eq!(p.hidden_count(), 1);
        assert_eq!(p.highest_visible_slot(), Some(2));
        assert_eq!(p.first_hidden_slot(), Some(1));
    }

    #[test]
    fn test_round_done_iff_no_hidden() {
        assert!(hand(&[Card::new(CardKind::One), Card::new(CardKind::Wild)]).is_round_done());
        assert!(!hand(&[Card::new(CardKind::One), Card::hidden(CardKind::Two)]).is_round_done());
        assert!(hand(&[]).is_round_done());
    }

    #[test]
    fn test_wants() {
        let p = hand(&[Card::new(CardKind::One), Card::hidden(CardKind::Skip)]);
        assert!(!p.wants(Card::new(CardKind::One)));
        assert!(p.wants(Card::new(CardKind::Two)));
        assert!(!p.wants(Card::new(CardKind::Three)));
        assert!(!p.wants(Card::new(CardKind::Wild)));
    }

    #[test]
    fn test_decide() {
        let mut p = hand(&[Card::hidden(CardKind::Giraffe), Card::new(CardKind::Two)]);

        assert_eq!(p.decide(None), TurnAction::DrawFromDeck);
        assert_eq!(p.decide(Some(Card::new(CardKind::One))), TurnAction::TakeDiscard);
        assert_eq!(p.decide(Some(Card::new(CardKind::Two))), TurnAction::DrawFromDeck);
        assert_eq!(p.decide(Some(Card::new(CardKind::Racoon))), TurnAction::DrawFromDeck);

        p.pending_skip = true;
        assert_eq!(p.decide(Some(Card::new(CardKind::One))), TurnAction::ServeSkip);
    }

    #[test]
    fn test_trim_hand() {
        let mut p = hand(&[Card::new(CardKind::One), Card::new(CardKind::Two)]);
        assert!(!p.trim_hand());
        assert_eq!(p.hand.as_slice(), &[Card::new(CardKind::Two)]);
        assert!(p.trim_hand());
        assert!(p.trim_hand());
    }

    #[test]
    fn test_player_serialization() {
        let p = hand(&[Card::hidden(CardKind::Six)]);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
