//! Match driver tests across table sizes.

use too_many_monkeys::cards::{Card, CardKind};
use too_many_monkeys::core::{GameRng, GameState, Player, PlayerId, PlayerMap};
use too_many_monkeys::simulation::MatchRunner;

/// One seat, one slot: the first reveal ends the round and the match.
#[test]
fn test_single_slot_match() {
    for seed in 0..20 {
        let outcome = MatchRunner::new(1, 1, GameRng::new(seed)).run().unwrap();
        assert_eq!(outcome.winner, PlayerId::new(0));
        assert_eq!(outcome.rounds, 1);
        assert!(outcome.turns >= 1);
    }
}

/// Slot 0 already dealt hiding a One; the player digs until a One lands.
#[test]
fn test_single_slot_dealt_scenario() {
    let players = PlayerMap::new(1, |id| Player::with_hand(id, [Card::hidden(CardKind::One)]));
    let mut runner = MatchRunner::with_players(players, GameRng::new(4));
    let state = GameState::with_draw_pile(vec![
        Card::new(CardKind::Skip),
        Card::new(CardKind::Elephant),
        Card::new(CardKind::Three),
        Card::new(CardKind::One),
    ]);

    let winner = runner.play_dealt_round(state).unwrap();
    assert_eq!(winner, PlayerId::new(0));
    assert_eq!(runner.turns(), 4);
    assert_eq!(
        runner.players()[winner].hand.as_slice(),
        &[Card::new(CardKind::One)]
    );
    assert!(runner.finish_round(winner));
    assert_eq!(runner.rounds(), 1);
}

/// Matches finish for every legal table size.
#[test]
fn test_matches_finish_for_all_table_sizes() {
    for player_count in 1..=7 {
        let outcome = MatchRunner::new(player_count, 6, GameRng::from_entropy())
            .run()
            .unwrap();
        assert!(outcome.winner.index() < player_count);
        assert!(outcome.rounds >= 6);
        assert!(outcome.turns >= outcome.rounds);
    }
}

/// Two-slot hands: at most one round win per seat before someone empties out.
#[test]
fn test_small_hands_bound_round_count() {
    let players = PlayerMap::new(3, |id| Player::new(id, 2));
    let runner = MatchRunner::with_players(players, GameRng::new(21));
    let outcome = runner.run().unwrap();
    assert!(outcome.rounds >= 2);
    assert!(outcome.rounds <= 4);
}
