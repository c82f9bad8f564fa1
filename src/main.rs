mod cli;
mod config;
mod display;
mod error;
mod models;
mod state;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::cli::Context;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "streakbot")]
#[command(about = "Count the days of a habit streak and keep a history of resets", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./streakbot.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the tracker data file (overrides the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the counter, replacing any existing record
    Start {
        /// Start date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the current streak
    Status {
        /// Measure the streak as of YYYY-MM-DD instead of today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Record a reset and start a new streak
    Reset {
        /// Reset date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all recorded resets
    History,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(report) => display::print_report(&report),
        Err(e) => {
            tracing::debug!(format_error = e.is_format(), "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = config::resolve(cli.config)?;
    let ctx = Context::new(&config, cli.data, Local::now().date_naive());
    tracing::debug!(data_file = %ctx.data_file.display(), today = %ctx.today, "resolved context");

    match cli.command {
        Commands::Start { date } => cli::start::run(&ctx, date),
        Commands::Status { as_of } => cli::status::run(&ctx, as_of),
        Commands::Reset { date } => cli::reset::run(&ctx, date),
        Commands::History => cli::history::run(&ctx),
    }
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
