use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "workout-tui")]
#[command(about = "Terminal UI for logging workouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the workout file in the data directory (default)
    Run,
    /// Run with a fresh in-memory store seeded with sample entries
    Dev,
    /// Print one page of the workout list and exit
    List {
        /// Case-insensitive part of the user name
        #[arg(short, long, default_value = "")]
        search: String,
        /// Exact workout type, e.g. "Running"
        #[arg(short = 't', long = "type")]
        workout_type: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        /// Entries per page (5, 10 or 20); defaults to the configured size
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Delete all stored entries; the next start seeds sample data again
    Reset,
    /// Print config path and create default file if missing
    ConfigPath,
}
