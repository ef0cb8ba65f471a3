//! Scenario runner: score a saved decision point and sample the engine's picks.
//!
//! Usage:
//!   foresight cli/scenarios/revenge_kill.json --trials 200
//!   RUST_LOG=foresight_engine=debug foresight scenario.json --seed 7

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use foresight_engine::Engine;

use crate::scenario::{Scenario, load_config};

const BAR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
#[command(name = "foresight")]
#[command(about = "Score a battle scenario and sample the engine's choices")]
struct Args {
    /// Scenario JSON with a snapshot and its candidate action sets
    scenario: PathBuf,

    /// Number of consecutive decisions to sample
    #[arg(short, long, default_value_t = 1)]
    trials: usize,

    /// RNG seed, overriding any seed in the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Engine config JSON, replacing the scenario's own config
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let scenario = Scenario::load(&args.scenario)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => scenario.config.clone().unwrap_or_default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let mut engine = Engine::new(config).context("Invalid engine config")?;

    let snapshot = &scenario.snapshot;
    let candidates = &scenario.candidates;
    println!(
        "Turn {} as {} ({} candidates)",
        snapshot.turn,
        snapshot.perspective.as_str(),
        candidates.len()
    );
    if candidates.is_empty() {
        println!("Nothing to decide");
        return Ok(());
    }

    println!();
    println!("=== SCORES ===");
    for scored in engine.score_candidates(snapshot, candidates) {
        println!(
            "  [{}] {:<28} {:>10.1}",
            scored.index,
            candidates[scored.index].to_choice(),
            scored.score
        );
    }

    let mut picks = vec![0usize; candidates.len()];
    for _ in 0..args.trials {
        let Some(chosen) = engine.decide(snapshot, candidates) else {
            break;
        };
        if let Some(index) = candidates.iter().position(|c| std::ptr::eq(c, chosen)) {
            picks[index] += 1;
        }
    }

    println!();
    println!("=== PICKS ({} trials) ===", args.trials);
    for (index, count) in picks.iter().enumerate() {
        println!(
            "  [{}] {:<28} {:>5} {}",
            index,
            candidates[index].to_choice(),
            count,
            bar(*count, args.trials)
        );
    }
    println!();
    println!("History: {}", engine.history().collect::<Vec<_>>().join(" -> "));

    Ok(())
}

/// Histogram bar scaled to [`BAR_WIDTH`]
fn bar(count: usize, total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    "#".repeat(count * BAR_WIDTH / total)
}
