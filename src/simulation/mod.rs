//! Monte-Carlo simulation of whole matches.
//!
//! ## Overview
//!
//! - **MatchRunner**: plays one match to completion and reports the winner
//! - **Simulation**: spreads matches across worker threads and merges
//!   per-seat win tallies
//!
//! ## Usage
//!
//! ```rust,no_run
//! use too_many_monkeys::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_players(4)
//!     .with_matches(1_000);
//!
//! let summary = Simulation::new(config)?.run()?;
//! print!("{}", summary);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod harness;
pub mod match_runner;
pub mod stats;

pub use config::SimulationConfig;
pub use harness::Simulation;
pub use match_runner::{MatchOutcome, MatchRunner};
pub use stats::{SimulationSummary, SimulationTally};
