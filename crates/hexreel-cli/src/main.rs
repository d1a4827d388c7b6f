//! HexReel terminal front end
//!
//! Usage:
//!   hexreel                      - Play until the first win or loss
//!   hexreel --spins 5 --json     - Five spins, snapshots as JSON lines
//!   hexreel --force win          - Every spin lands on a match
//!   hexreel --config game.yaml   - Load settings from a file

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tokio::sync::broadcast::error::RecvError;

use hexreel_core::{
    GRID_ROWS, GameConfig, MISMATCH_FRAME, REEL_COUNT, ScriptedRandomizer, ShuffleTiming, Snapshot,
    SpinController, Symbol, TimingProfile,
};

#[derive(Parser)]
#[command(name = "hexreel", about = "Five-reel hexagon slot machine")]
struct Cli {
    /// Config file (.json, .yaml, .yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of spins (default: play until a win or a loss)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    spins: Option<u32>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Spins allowed before the game is lost
    #[arg(long)]
    max_tries: Option<u32>,

    /// Timing profile: standard, classic, turbo
    #[arg(long, value_parser = parse_profile)]
    profile: Option<TimingProfile>,

    /// Script the reels instead of drawing them
    #[arg(long, value_enum)]
    force: Option<Force>,

    /// Print snapshots as JSON lines
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Force {
    /// Last tick of every spin shows five of a kind
    Win,
    /// Reels never match
    Lose,
}

fn parse_profile(name: &str) -> Result<TimingProfile, String> {
    TimingProfile::from_name(name).ok_or_else(|| format!("unknown timing profile '{name}'"))
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(profile) = cli.profile {
        config.timing = ShuffleTiming::from_profile(profile);
    }
    if let Some(max_tries) = cli.max_tries {
        config.max_tries = max_tries;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate().context("invalid game config")?;
    Ok(config)
}

fn render(snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    let grid = GRID_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .map(|&reel| {
                    Symbol::from_index(snapshot.reels[reel])
                        .map(Symbol::name)
                        .unwrap_or("?")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let phase = if snapshot.spin == 0 {
        "ready".to_string()
    } else if snapshot.is_shuffling {
        format!("tick {:>2}", snapshot.tick)
    } else {
        "settled".to_string()
    };

    println!(
        "#{:<3} {:<8} [{}]  remaining tries: {}",
        snapshot.spin, phase, grid, snapshot.remaining_tries
    );

    if let (Some(title), Some(message)) = (snapshot.outcome.title(), snapshot.outcome.message()) {
        println!("      {title}: {message}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let mut builder = SpinController::builder().config(config.clone());
    builder = match cli.force {
        Some(Force::Win) => builder.randomizer(ScriptedRandomizer::ending_with(
            config.timing.max_shuffles,
            [2; REEL_COUNT],
        )),
        Some(Force::Lose) => builder.randomizer(ScriptedRandomizer::repeating(MISMATCH_FRAME)),
        None => builder,
    };
    let controller = builder.build()?;

    log::info!(
        "Starting HexReel: {} tries, {} ticks x {}ms",
        config.max_tries,
        config.timing.max_shuffles,
        config.timing.shuffle_interval_ms
    );

    let mut snapshots = controller.subscribe();
    render(&controller.snapshot(), cli.json)?;

    let mut played = 0u32;
    loop {
        let handle = controller.spin()?;

        let terminal = loop {
            match snapshots.recv().await {
                Ok(snapshot) => {
                    render(&snapshot, cli.json)?;
                    if snapshot.is_terminal() {
                        break snapshot;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Renderer fell behind, skipped {} snapshots", skipped);
                }
                Err(RecvError::Closed) => bail!("snapshot channel closed mid-spin"),
            }
        };
        handle.finished().await?;
        played += 1;

        let done = match cli.spins {
            Some(limit) => played >= limit,
            None => terminal.outcome.is_terminal(),
        };
        if done {
            break;
        }
    }

    let stats = controller.stats();
    log::info!(
        "Session: {} spins, {} wins, {} losses ({:.0}% win rate)",
        stats.total_spins,
        stats.wins,
        stats.losses,
        stats.win_rate()
    );
    Ok(())
}
