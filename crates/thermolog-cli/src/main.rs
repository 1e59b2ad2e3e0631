use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod format;

use crate::cli::{Cli, Commands};
use crate::commands::{ListArgs, cmd_config, cmd_generate, cmd_list, cmd_query};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "thermolog", &mut io::stdout());
        return Ok(());
    }

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so stdout stays pipeable (JSON/CSV output)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load();

    match cli.command {
        Commands::Generate {
            database,
            number_of_points,
        } => {
            let filename = config::resolve_database(database.filename, &config);
            cmd_generate(&filename, number_of_points)
        }
        Commands::Query { database, format } => {
            let filename = config::resolve_database(database.filename, &config);
            let format = config::resolve_format(format, &config);
            cmd_query(&filename, format)
        }
        Commands::List {
            database,
            format,
            count,
            offset,
            since,
            until,
            no_header,
        } => {
            let filename = config::resolve_database(database.filename, &config);
            let format = config::resolve_format(format, &config);
            cmd_list(
                &filename,
                ListArgs {
                    format,
                    count,
                    offset,
                    since,
                    until,
                    no_header,
                },
            )
        }
        Commands::Config { action } => cmd_config(action),
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }
}
