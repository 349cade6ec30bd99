//! Tournament runner.
//!
//! Plays a full round-robin tournament of the built-in strategies for
//! one of the supported games and prints the leaderboard. An illegal
//! move by any strategy terminates the process with a non-zero status
//! and a message naming the offender.

mod export;

use clap::Parser;
use game_logic::{
    fixed_series, rank, run_tournament, Alternate, AlwaysA, AlwaysB, Game, GrimTrigger, Random,
    RoundLengths, Strategy, TitForTat, TournamentReport,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tournament", about = "Repeated normal-form game tournament")]
struct Args {
    /// Game to play: prison, staghunt, chicken or pennies
    game: Game,

    /// Fixed rounds per match; 0 plays randomized-length matches
    #[arg(short = 'n', long = "rounds", default_value_t = 0)]
    rounds: u32,

    /// Matches per strategy pair
    #[arg(long, default_value_t = 100)]
    series: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write per-pair histories under this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Write the final rankings as JSON to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

/// The resolved strategy registry handed to the scheduler. The core
/// never discovers strategies itself.
fn registry(seed: Option<u64>) -> Vec<Box<dyn Strategy>> {
    let random = match seed {
        Some(seed) => Random::seeded(seed),
        None => Random::from_entropy(),
    };
    vec![
        Box::new(AlwaysA),
        Box::new(AlwaysB),
        Box::new(Alternate),
        Box::new(TitForTat),
        Box::new(GrimTrigger),
        Box::new(random),
    ]
}

fn run(args: Args) -> anyhow::Result<()> {
    let series_lengths = if args.rounds == 0 {
        let mut lengths = match args.seed {
            Some(seed) => RoundLengths::seeded(seed),
            None => RoundLengths::from_entropy(),
        };
        lengths.series(args.series)
    } else {
        fixed_series(args.rounds, args.series)
    };

    let strategies = registry(args.seed);
    let outcome = run_tournament(args.game, &strategies, &series_lengths)?;

    let matches_per_strategy = strategies.len().saturating_sub(1) * series_lengths.len();
    let rankings = rank(&outcome.totals, args.game, matches_per_strategy);

    println!("Leaderboard ({}):", args.game);
    for row in &rankings {
        println!("{}. {}: {}", row.rank, row.name, row.score);
    }

    if let Some(dir) = &args.export {
        export::write_histories(&outcome.histories, dir)?;
    }
    if let Some(path) = &args.report {
        TournamentReport::new(args.game, series_lengths.len(), rankings).save(path)?;
    }

    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
