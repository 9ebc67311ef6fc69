use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use too_many_monkeys::{Simulation, SimulationConfig};

/// Estimate each seat's win rate in Too Many Monkeys.
#[derive(Parser, Debug)]
#[command(name = "too-many-monkeys", version, about)]
struct Args {
    /// Number of players in the tournament
    #[arg(short, long, default_value_t = 6)]
    players: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 100_000)]
    games: usize,

    /// Worker threads (defaults to available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = SimulationConfig::new()
        .with_players(args.players)
        .with_matches(args.games);
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }

    let simulation = Simulation::new(config).context("refusing to start simulation")?;
    let summary = simulation.run().context("simulation failed")?;
    print!("{}", summary);
    Ok(())
}
