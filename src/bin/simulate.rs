//! Batch simulator: plays many matches with `BasicStrategy` at every seat.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use haystack::simulation::{self, SimulationStats};
use haystack::{MatchConfig, SimulationConfig};

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Play a batch of haystack matches and report win rates")]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value = "1000")]
    games: u32,

    /// Players per match (2-8)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Batch seed; every match gets its own stream forked from it
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Check card conservation after every turn
    #[arg(long)]
    audit: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    /// Print stats as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let base = MatchConfig::new()
        .with_player_count(args.players)
        .with_seed(args.seed)
        .with_invariant_checks(args.audit);
    let config = SimulationConfig::new(base).with_matches(args.games);

    info!(games = args.games, players = args.players, seed = args.seed, "starting simulation");
    let start = Instant::now();
    let stats = match simulation::run(&config) {
        Ok(stats) => stats,
        Err(err) => {
            error!(%err, "simulation failed");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&stats, elapsed);
    }
    ExitCode::SUCCESS
}

fn print_summary(stats: &SimulationStats, elapsed: std::time::Duration) {
    println!("\n=== Simulation Summary ===");
    println!("Matches: {}", stats.matches);
    println!("Total time: {elapsed:?}");
    if stats.matches > 0 {
        println!("Average time per match: {:?}", elapsed / stats.matches);
    }
    println!("Draws: {} ({:.1}%)", stats.draws, stats.draw_rate() * 100.0);
    println!("Average rounds: {:.2}", stats.average_rounds());
    println!("Vetoes spent: {}", stats.vetoes);

    println!("\n=== Wins by Seat ===");
    for (player, &wins) in stats.wins.iter() {
        let rate = if stats.matches > 0 {
            f64::from(wins) / f64::from(stats.matches) * 100.0
        } else {
            0.0
        };
        println!("{player}: {wins} ({rate:.1}%)");
    }

    println!("\n=== Actions ===");
    let mut actions: Vec<_> = stats.actions.iter().collect();
    actions.sort();
    for (kind, count) in actions {
        println!("{kind:?}: {count}");
    }
}
