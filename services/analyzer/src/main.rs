//! Best-track analysis CLI.
//!
//! Streams a HURDAT2 dataset, prints per-storm reports, and scores the
//! wind-extent quadrant hypothesis across the dataset. Runs either from
//! subcommands or as the original prompt-driven interactive session.

mod prompt;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use session::OutputFormat;

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Storm-track analysis over HURDAT2 datasets", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, env = "ANALYZER_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every storm in a dataset and score the hypothesis
    Analyze {
        /// Path to a HURDAT2 dataset
        file: PathBuf,

        /// Print each storm's report
        #[arg(short, long)]
        details: bool,

        /// Print a per-season summary
        #[arg(long)]
        by_year: bool,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Report a single storm located by its identifier
    Storm {
        /// Path to a HURDAT2 dataset
        file: PathBuf,

        /// Storm ID, e.g. AL012015
        storm_id: String,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Prompt-driven session (the default when no subcommand is given)
    Interactive,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Some(Commands::Analyze {
            file,
            details,
            by_year,
            output,
        }) => session::analyze_file(&file, details, by_year, OutputFormat::parse(&output)),
        Some(Commands::Storm {
            file,
            storm_id,
            output,
        }) => session::report_single(&file, &storm_id, OutputFormat::parse(&output)),
        Some(Commands::Interactive) | None => session::interactive(),
    }
}
