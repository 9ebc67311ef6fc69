//! Win tallies and the final summary.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::match_runner::MatchOutcome;
use crate::core::{PlayerId, PlayerMap};

/// Per-seat wins plus match, round and turn totals.
///
/// Workers fill a private tally and merge it into the shared one once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTally {
    pub wins: PlayerMap<u64>,
    pub matches: u64,
    pub rounds: u64,
    pub turns: u64,
}

impl SimulationTally {
    /// Empty tally for `player_count` seats.
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: PlayerMap::with_value(player_count, 0),
            matches: 0,
            rounds: 0,
            turns: 0,
        }
    }

    /// Count one finished match.
    pub fn record(&mut self, outcome: &MatchOutcome) {
        self.wins[outcome.winner] += 1;
        self.matches += 1;
        self.rounds += outcome.rounds;
        self.turns += outcome.turns;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &SimulationTally) {
        for (seat, wins) in other.wins.iter() {
            self.wins[seat] += wins;
        }
        self.matches += other.matches;
        self.rounds += other.rounds;
        self.turns += other.turns;
    }
}

/// Result of a full simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub tally: SimulationTally,
    pub elapsed: Duration,
}

impl SimulationSummary {
    #[must_use]
    pub fn matches(&self) -> u64 {
        self.tally.matches
    }

    #[must_use]
    pub fn wins(&self, seat: PlayerId) -> u64 {
        self.tally.wins[seat]
    }

    /// Percentage of matches won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: PlayerId) -> f64 {
        if self.tally.matches == 0 {
            0.0
        } else {
            100.0 * self.wins(seat) as f64 / self.tally.matches as f64
        }
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    #[must_use]
    pub fn avg_ms_per_match(&self) -> f64 {
        self.per_match(self.elapsed_ms())
    }

    #[must_use]
    pub fn avg_rounds(&self) -> f64 {
        self.per_match(self.tally.rounds as f64)
    }

    #[must_use]
    pub fn avg_turns(&self) -> f64 {
        self.per_match(self.tally.turns as f64)
    }

    fn per_match(&self, total: f64) -> f64 {
        if self.tally.matches == 0 {
            0.0
        } else {
            total / self.tally.matches as f64
        }
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} matches in {:.3}ms ({:.3}ms/match)",
            self.matches(),
            self.elapsed_ms(),
            self.avg_ms_per_match()
        )?;
        writeln!(
            f,
            "{:.2} rounds/match, {:.2} turns/match",
            self.avg_rounds(),
            self.avg_turns()
        )?;
        for (seat, wins) in self.tally.wins.iter() {
            writeln!(f, "{}: {} wins ({:.2}%)", seat, wins, self.win_rate(seat))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winner: u8, rounds: u64, turns: u64) -> MatchOutcome {
        MatchOutcome {
            winner: PlayerId::new(winner),
            rounds,
            turns,
        }
    }

    #[test]
    fn test_record() {
        let mut tally = SimulationTally::new(3);
        tally.record(&outcome(1, 6, 100));
        tally.record(&outcome(1, 7, 120));
        tally.record(&outcome(2, 8, 80));

        assert_eq!(tally.matches, 3);
        assert_eq!(tally.rounds, 21);
        assert_eq!(tally.turns, 300);
        assert_eq!(tally.wins[PlayerId::new(0)], 0);
        assert_eq!(tally.wins[PlayerId::new(1)], 2);
        assert_eq!(tally.wins[PlayerId::new(2)], 1);
    }

    #[test]
    fn test_merge() {
        let mut a = SimulationTally::new(2);
        a.record(&outcome(0, 1, 2));
        let mut b = SimulationTally::new(2);
        b.record(&outcome(1, 3, 4));
        b.record(&outcome(1, 3, 4));

        a.merge(&b);
        assert_eq!(a.matches, 3);
        assert_eq!(a.rounds, 7);
        assert_eq!(a.turns, 10);
        assert_eq!(a.wins.values().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_summary_rates() {
        let mut tally = SimulationTally::new(2);
        tally.record(&outcome(0, 2, 10));
        tally.record(&outcome(0, 2, 10));
        tally.record(&outcome(0, 2, 10));
        tally.record(&outcome(1, 2, 30));
        let summary = SimulationSummary {
            tally,
            elapsed: Duration::from_millis(8),
        };

        assert_eq!(summary.win_rate(PlayerId::new(0)), 75.0);
        assert_eq!(summary.win_rate(PlayerId::new(1)), 25.0);
        assert_eq!(summary.avg_rounds(), 2.0);
        assert_eq!(summary.avg_turns(), 15.0);
        assert!((summary.avg_ms_per_match() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SimulationSummary {
            tally: SimulationTally::new(1),
            elapsed: Duration::ZERO,
        };
        assert_eq!(summary.win_rate(PlayerId::new(0)), 0.0);
        assert_eq!(summary.avg_ms_per_match(), 0.0);
    }

    #[test]
    fn test_display() {
        let mut tally = SimulationTally::new(2);
        tally.record(&outcome(1, 3, 9));
        let summary = SimulationSummary {
            tally,
            elapsed: Duration::from_millis(5),
        };
        let text = summary.to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "1 matches in 5.000ms (5.000ms/match)");
        assert_eq!(lines[1], "3.00 rounds/match, 9.00 turns/match");
        assert_eq!(lines[2], "Player 0: 0 wins (0.00%)");
        assert_eq!(lines[3], "Player 1: 1 wins (100.00%)");
    }

    #[test]
    fn test_tally_serialization() {
        let mut tally = SimulationTally::new(2);
        tally.record(&outcome(1, 3, 9));
        let json = serde_json::to_string(&tally).unwrap();
        let deserialized: SimulationTally = serde_json::from_str(&json).unwrap();
        assert_eq!(tally, deserialized);
    }
}
