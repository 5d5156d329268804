//! CLI frontend for the gym training calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{Context, StatArgs, TrainerArgs};

#[derive(Parser)]
#[command(
    name = "gym",
    about = "Gym training calculator: stat gains, energy splits, and gym rankings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Custom gym table (JSON array of gyms)
    #[arg(long = "gyms", global = true)]
    gym_table: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known gyms
    Gyms,

    /// Gain of a single training action
    Gain {
        #[command(flatten)]
        stat: StatArgs,

        #[command(flatten)]
        trainer: TrainerArgs,
    },

    /// Gain of several consecutive actions
    Train {
        #[command(flatten)]
        stat: StatArgs,

        #[command(flatten)]
        trainer: TrainerArgs,

        /// Number of actions (default: as many as the energy pays for)
        #[arg(short, long)]
        actions: Option<u32>,

        /// Ignore happiness decay and multiply one action's gain
        #[arg(long = "static")]
        fixed: bool,

        /// Show every action
        #[arg(short, long)]
        verbose: bool,
    },

    /// Split energy across stats by percentage
    Allocate {
        #[command(flatten)]
        trainer: TrainerArgs,

        /// Share per stat: "str,def,spd,dex" (e.g. "25,25,25,25") or "spd=60,dex=40"
        #[arg(short, long)]
        split: String,

        /// Current stats: one number for all, or "str=1e6,spd=2e6"
        #[arg(long)]
        stats: Option<String>,

        /// Ignore happiness decay
        #[arg(long = "static")]
        fixed: bool,
    },

    /// Rank gyms by the best single-stat gain
    Rank {
        #[command(flatten)]
        trainer: TrainerArgs,

        /// Current stats: one number for all, or "str=1e6,spd=2e6"
        #[arg(long)]
        stats: Option<String>,

        /// Only show the best N gyms
        #[arg(short, long)]
        top: Option<usize>,

        /// Ignore happiness decay
        #[arg(long = "static")]
        fixed: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = Context::load(cli.config.as_deref(), cli.gym_table.as_deref(), cli.json)
        .and_then(|ctx| run(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(ctx: &Context, command: Commands) -> Result<(), String> {
    match command {
        Commands::Gyms => commands::gyms::run(ctx),
        Commands::Gain { stat, trainer } => commands::gain::run(ctx, &stat, &trainer),
        Commands::Train {
            stat,
            trainer,
            actions,
            fixed,
            verbose,
        } => commands::train::run(ctx, &stat, &trainer, actions, fixed, verbose),
        Commands::Allocate {
            trainer,
            split,
            stats,
            fixed,
        } => commands::allocate::run(ctx, &trainer, &split, stats.as_deref(), fixed),
        Commands::Rank {
            trainer,
            stats,
            top,
            fixed,
        } => commands::rank::run(ctx, &trainer, stats.as_deref(), top, fixed),
    }
}

/// Log to stderr, filtered by `GYM_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("GYM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
