//! Caddie CLI
//!
//! Shot groups + hole geometry (JSON) → ranked strategies (JSON on stdout).
//! Logs go to stderr; set `RUST_LOG` to adjust.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use caddie_core::models::OptimizeMode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "caddie")]
#[command(about = "Monte Carlo golf strategy planner", long_about = None)]
struct Cli {
    /// Fixed RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Engine config JSON (overrides CADDIE_ENGINE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true, default_value = "false")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Scoring,
    Safe,
}

#[cfg(feature = "cli")]
impl From<Mode> for OptimizeMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Scoring => OptimizeMode::Scoring,
            Mode::Safe => OptimizeMode::Safe,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Best club sequences for a bare distance
    Approach {
        /// Shot groups JSON file
        #[arg(long)]
        clubs: PathBuf,

        /// Remaining distance in yards
        #[arg(long)]
        distance: f64,
    },

    /// Rank strategies for one hole
    Hole {
        #[arg(long)]
        clubs: PathBuf,

        /// Hole geometry JSON file
        #[arg(long)]
        hole: PathBuf,

        #[arg(long, value_enum, default_value = "scoring")]
        mode: Mode,
    },

    /// Plan a full round
    Round {
        #[arg(long)]
        clubs: PathBuf,

        /// JSON array of hole geometries
        #[arg(long)]
        course: PathBuf,

        #[arg(long, value_enum, default_value = "scoring")]
        mode: Mode,

        /// Spread holes across all cores
        #[arg(long, default_value = "false")]
        parallel: bool,
    },

    /// Print the club distributions built from shot history
    Distributions {
        #[arg(long)]
        clubs: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use caddie_cli::{load_course, load_engine_config, load_hole, load_shot_groups, make_rng, to_json};
    use caddie_core::engine::{
        build_distributions, find_best_approaches, optimize_hole, optimize_round, optimize_round_parallel,
    };
    use tracing::info;

    init_tracing();
    let cli = Cli::parse();
    let config = load_engine_config(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Approach { clubs, distance } => {
            let clubs = build_distributions(&load_shot_groups(&clubs)?);
            let mut rng = make_rng(cli.seed);
            let recs = find_best_approaches(distance, &clubs, &config, &mut rng);
            if recs.is_empty() {
                info!(distance, "no club sequence within tolerance");
            }
            to_json(&recs, cli.pretty)?
        }

        Commands::Hole { clubs, hole, mode } => {
            let clubs = build_distributions(&load_shot_groups(&clubs)?);
            let hole = load_hole(&hole)?;
            let mut rng = make_rng(cli.seed);
            let strategies = optimize_hole(&hole, &clubs, mode.into(), &config, &mut rng);
            to_json(&strategies, cli.pretty)?
        }

        Commands::Round { clubs, course, mode, parallel } => {
            let clubs = build_distributions(&load_shot_groups(&clubs)?);
            let holes = load_course(&course)?;
            let report = |done: usize, total: usize| info!(done, total, "hole planned");

            let plan = if parallel {
                let seed = cli.seed.unwrap_or_else(rand::random);
                optimize_round_parallel(&holes, &clubs, mode.into(), &config, seed, Some(&report))
            } else {
                let mut rng = make_rng(cli.seed);
                let mut progress = report;
                optimize_round(&holes, &clubs, mode.into(), &config, &mut rng, Some(&mut progress))
            };
            to_json(&plan, cli.pretty)?
        }

        Commands::Distributions { clubs } => {
            let clubs = build_distributions(&load_shot_groups(&clubs)?);
            to_json(&clubs, cli.pretty)?
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("caddie CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
