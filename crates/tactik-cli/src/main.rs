//! tactik CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod calendar;
mod commands;
mod prompt;

#[derive(Parser)]
#[command(
    name = "tactik",
    version,
    about = "Study planner that ranks what to revise for tomorrow"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank tomorrow's subjects (interactive unless --file is given)
    Plan {
        /// Timetable file, one line of comma-separated subjects per day
        #[arg(long)]
        file: Option<PathBuf>,

        /// Day to prepare for: index 0-6 (Monday = 0) or weekday name
        #[arg(long, value_parser = calendar::parse_day_arg)]
        tomorrow: Option<usize>,

        /// Preset difficulty rating, e.g. "Math=8" (repeatable)
        #[arg(long = "difficulty", value_name = "NAME=N", value_parser = parse_difficulty)]
        difficulties: Vec<(String, i64)>,

        /// Never prompt for difficulty; unrated subjects get the default
        #[arg(long)]
        no_prompt: bool,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Also save the report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a timetable file and list its days
    Validate {
        /// Timetable file to check
        #[arg(long)]
        file: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example timetable
    Init,

    /// Explain how priorities are computed
    About,
}

fn parse_difficulty(s: &str) -> Result<(String, i64), String> {
    tactik_core::DifficultyMap::parse_assignment(s)
}

fn main() {
    // RUST_LOG replaces the default filter entirely when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tactik=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan {
            file,
            tomorrow,
            difficulties,
            no_prompt,
            format,
            output,
            config,
        } => commands::plan::execute(
            file,
            tomorrow,
            difficulties,
            no_prompt,
            format,
            output,
            config,
        ),
        Commands::Validate { file, config } => commands::validate::execute(file, config),
        Commands::Init => commands::init::execute(),
        Commands::About => commands::about::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
