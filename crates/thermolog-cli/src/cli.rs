//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Reusable database location arguments
#[derive(Debug, Clone, Args)]
pub struct DatabaseArgs {
    /// Path to the database file (defaults to foo.db), or use THERMOLOG_DB env var
    #[arg(long, env = "THERMOLOG_DB")]
    pub filename: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "thermolog")]
#[command(author, version, about = "Generate and query synthetic temperature time series", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate synthetic points and store them as one batch
    Generate {
        #[command(flatten)]
        database: DatabaseArgs,

        /// Number of points to generate
        #[arg(short = 'n', long, default_value_t = 1000)]
        number_of_points: u32,
    },

    /// Summarize stored points: extremes, duration, middle-third selection
    Query {
        #[command(flatten)]
        database: DatabaseArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List stored points in chronological order
    List {
        #[command(flatten)]
        database: DatabaseArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Number of points to list (0 for all)
        #[arg(short, long, default_value = "0")]
        count: u32,

        /// Skip this many points first
        #[arg(long, default_value = "0")]
        offset: u32,

        /// Filter points since this date/time (RFC3339 or YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// Filter points until this date/time (RFC3339 or YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Omit header row in CSV output (useful for appending)
        #[arg(long)]
        no_header: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init,
}
