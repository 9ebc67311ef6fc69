//! Parallel Monte-Carlo harness.
//!
//! Worker `w` of `W` runs match indices `w, w + W, w + 2W, ...`. Every match
//! gets its own entropy-seeded RNG and its own roster, so workers share
//! nothing while playing. Each worker merges its private tally into the
//! shared one exactly once, under a mutex.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use tracing::{debug, info};

use super::config::SimulationConfig;
use super::match_runner::MatchRunner;
use super::stats::{SimulationSummary, SimulationTally};
use crate::core::GameRng;
use crate::error::{ConfigError, SimError};

/// A validated batch of matches.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Validate `config`; fails before any work is done.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run every match and aggregate the results.
    pub fn run(&self) -> Result<SimulationSummary, SimError> {
        let workers = self.config.worker_count();
        info!(
            players = self.config.players,
            matches = self.config.matches,
            workers,
            "starting simulation"
        );

        let start = Instant::now();
        let shared = Mutex::new(SimulationTally::new(self.config.players));

        let results: Vec<Result<(), SimError>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|worker| {
                    let config = &self.config;
                    let shared = &shared;
                    scope.spawn(move || run_worker(worker, workers, config, shared))
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(SimError::WorkerPanicked(worker)))
                })
                .collect()
        });
        results.into_iter().collect::<Result<(), _>>()?;

        let summary = SimulationSummary {
            tally: shared.into_inner().unwrap_or_else(PoisonError::into_inner),
            elapsed: start.elapsed(),
        };
        info!(
            matches = summary.matches(),
            elapsed_ms = summary.elapsed_ms(),
            "simulation finished"
        );
        Ok(summary)
    }
}

fn run_worker(
    worker: usize,
    workers: usize,
    config: &SimulationConfig,
    shared: &Mutex<SimulationTally>,
) -> Result<(), SimError> {
    let mut local = SimulationTally::new(config.players);

    for index in (worker..config.matches).step_by(workers) {
        let runner = MatchRunner::new(config.players, config.hand_size, GameRng::from_entropy());
        let outcome = runner.run().map_err(|source| SimError::Match { index, source })?;
        local.record(&outcome);
    }

    debug!(worker, matches = local.matches, "worker done");
    shared
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .merge(&local);
    Ok(())
}
