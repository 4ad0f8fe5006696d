//! Headless blockfit runner (default binary).
//!
//! Plays one or more sessions with a built-in strategy and prints a summary per
//! game. Useful for balancing catalogs and scoring rules without a UI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blockfit::autoplay::{run_games, GameSummary, StrategyKind};
use blockfit::config::{apply_overrides, load_session_config, Overrides};
use blockfit::logging;
use blockfit::types::RefillPolicy;

/// Autoplay block-placement sessions and report scores.
#[derive(Debug, Parser)]
#[command(name = "blockfit", version, about)]
struct Args {
    /// Seed of the first game; later games use consecutive seeds. Random if omitted.
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Session config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    /// Shapes visible ahead of the slots
    #[arg(long)]
    lookahead: Option<usize>,

    /// Number of player-facing slots
    #[arg(long)]
    slots: Option<usize>,

    /// When emptied slots are refilled: immediate or when_all_empty
    #[arg(long, value_parser = parse_refill)]
    refill: Option<RefillPolicy>,

    /// Best score to start from
    #[arg(long)]
    best: Option<u32>,

    /// Use the extended shape catalog
    #[arg(long)]
    extended: bool,

    /// Move selection
    #[arg(long, value_enum, default_value_t = StrategyKind::Greedy)]
    strategy: StrategyKind,

    /// Stop a game after this many placements
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Print one JSON object per game instead of text
    #[arg(long)]
    json: bool,

    /// Also write log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_refill(s: &str) -> Result<RefillPolicy, String> {
    RefillPolicy::from_str(s).ok_or_else(|| format!("unknown refill policy '{s}'"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref())?;

    let overrides = Overrides {
        rows: args.rows,
        columns: args.columns,
        lookahead: args.lookahead,
        slots: args.slots,
        refill: args.refill,
        best_score: args.best,
        extended_catalog: args.extended,
    };
    let config = apply_overrides(load_session_config(args.config.as_deref())?, &overrides);
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("playing {} game(s) from seed {}", args.games, seed);

    let summaries = run_games(config, seed, args.games, args.strategy, args.max_turns)?;
    for summary in &summaries {
        print_summary(summary, args.json)?;
    }

    if !args.json && summaries.len() > 1 {
        let total: u64 = summaries.iter().map(|s| u64::from(s.score)).sum();
        let best = summaries.iter().map(|s| s.best_score).max().unwrap_or(0);
        println!(
            "{} games: mean score {:.1}, best {}",
            summaries.len(),
            total as f64 / summaries.len() as f64,
            best
        );
    }
    Ok(())
}

fn print_summary(summary: &GameSummary, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(summary).context("summary")?;
        println!("{line}");
        return Ok(());
    }
    println!(
        "seed {:>10}  score {:>6}  best {:>6}  turns {:>5}  lines {:>4}{}{}",
        summary.seed,
        summary.score,
        summary.best_score,
        summary.turns,
        summary.lines_cleared,
        summary
            .pattern_id
            .as_deref()
            .map(|id| format!("  pattern {id}"))
            .unwrap_or_default(),
        if summary.game_over { "" } else { "  (turn cap)" }
    );
    Ok(())
}
