//! Opponent selection for Skip and Do-Not-Disturb.
//!
//! Both cards aim at the opponent with the highest power (revealed slots).
//! Ties are broken while scanning in seat order: an equally strong candidate
//! replaces the current pick on a fair coin flip. With more than two tied
//! candidates this favours later seats; that sequential behaviour is kept.

use crate::core::{GameRng, Player, PlayerId, PlayerMap};

/// Which opponents are eligible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetFilter {
    /// Any other player.
    AnyOpponent,
    /// Other players with at least one revealed slot.
    RevealedOpponent,
}

impl TargetFilter {
    fn accepts(self, player: &Player) -> bool {
        match self {
            TargetFilter::AnyOpponent => true,
            TargetFilter::RevealedOpponent => player.power() > 0,
        }
    }
}

/// Pick the strongest eligible opponent of `actor`.
///
/// Returns `None` when no opponent passes the filter.
pub fn strongest_opponent(
    players: &PlayerMap<Player>,
    actor: PlayerId,
    filter: TargetFilter,
    rng: &mut GameRng,
) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, usize)> = None;

    for (id, opponent) in players.iter() {
        if id == actor || !filter.accepts(opponent) {
            continue;
        }
        let power = opponent.power();
        best = match best {
            None => Some((id, power)),
            Some((_, best_power)) if power > best_power => Some((id, power)),
            Some((_, best_power)) if power == best_power && rng.coin_flip() => Some((id, power)),
            keep => keep,
        };
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind};

    fn player_with_power(id: u8, power: usize) -> Player {
        let cards = (0..4).map(|slot| {
            if slot < power {
                Card::new(CardKind::Giraffe)
            } else {
                Card::hidden(CardKind::Giraffe)
            }
        });
        Player::with_hand(PlayerId::new(id), cards)
    }

    fn table(powers: &[usize]) -> PlayerMap<Player> {
        PlayerMap::new(powers.len(), |id| player_with_power(id.0, powers[id.index()]))
    }

    #[test]
    fn test_no_opponents() {
        let players = table(&[2]);
        let mut rng = GameRng::new(1);
        assert_eq!(
            strongest_opponent(&players, PlayerId::new(0), TargetFilter::AnyOpponent, &mut rng),
            None
        );
    }

    #[test]
    fn test_single_opponent() {
        let players = table(&[3, 0]);
        let mut rng = GameRng::new(1);
        assert_eq!(
            strongest_opponent(&players, PlayerId::new(0), TargetFilter::AnyOpponent, &mut rng),
            Some(PlayerId::new(1))
        );
    }

    #[test]
    fn test_highest_power_wins() {
        let players = table(&[4, 1, 3, 2]);
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            assert_eq!(
                strongest_opponent(&players, PlayerId::new(0), TargetFilter::AnyOpponent, &mut rng),
                Some(PlayerId::new(2))
            );
        }
    }

    #[test]
    fn test_ties_pick_both() {
        let players = table(&[0, 2, 2]);
        let mut rng = GameRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let target =
                strongest_opponent(&players, PlayerId::new(0), TargetFilter::AnyOpponent, &mut rng)
                    .unwrap();
            seen[target.index()] = true;
        }
        assert_eq!(seen, [false, true, true]);
    }

    #[test]
    fn test_revealed_filter_skips_blind_opponents() {
        let players = table(&[1, 0, 0]);
        let mut rng = GameRng::new(1);
        assert_eq!(
            strongest_opponent(&players, PlayerId::new(0), TargetFilter::RevealedOpponent, &mut rng),
            None
        );

        let players = table(&[1, 0, 1]);
        assert_eq!(
            strongest_opponent(&players, PlayerId::new(0), TargetFilter::RevealedOpponent, &mut rng),
            Some(PlayerId::new(2))
        );
    }
}
