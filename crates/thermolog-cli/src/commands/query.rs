//! Query command - summarize the stored time series.

use std::path::Path;

use anyhow::{Context, Result, bail};

use thermolog_store::Store;

use crate::cli::OutputFormat;
use crate::format::format_summary_text;

/// Execute the query command.
///
/// Fails with a diagnostic when the store has no points.
pub fn cmd_query(filename: &Path, format: OutputFormat) -> Result<()> {
    let store = Store::open(filename)
        .with_context(|| format!("Failed to open database at {}", filename.display()))?;

    let summary = store
        .summarize()
        .with_context(|| format!("Failed to summarize {}", filename.display()))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print!("{}", format_summary_text(&summary)?),
        OutputFormat::Csv => {
            bail!("CSV output is not supported for query; use `thermolog list --format csv`")
        }
    }

    Ok(())
}
