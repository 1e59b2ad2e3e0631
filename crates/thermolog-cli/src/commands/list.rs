//! List command - print stored points.

use std::path::Path;

use anyhow::{Context, Result};
use time::OffsetDateTime;

use thermolog_store::{PointQuery, Store};

use crate::cli::OutputFormat;
use crate::format::{format_points_csv, format_points_json, format_points_text};

pub struct ListArgs {
    pub format: OutputFormat,
    pub count: u32,
    pub offset: u32,
    pub since: Option<String>,
    pub until: Option<String>,
    pub no_header: bool,
}

/// Execute the list command.
pub fn cmd_list(filename: &Path, args: ListArgs) -> Result<()> {
    let store = Store::open(filename)
        .with_context(|| format!("Failed to open database at {}", filename.display()))?;

    let mut query = PointQuery::new().oldest_first();

    if args.count > 0 {
        query = query.limit(args.count);
    }

    if args.offset > 0 {
        query = query.offset(args.offset);
    }

    if let Some(ref since) = args.since {
        query = query.since(parse_datetime(since)?);
    }

    if let Some(ref until) = args.until {
        query = query.until(parse_datetime(until)?);
    }

    let points = store.query_points(&query)?;

    if points.is_empty() && args.format == OutputFormat::Text {
        println!("No points found in {}", filename.display());
        return Ok(());
    }

    let formatted = match args.format {
        OutputFormat::Json => format_points_json(&points)?,
        OutputFormat::Csv => format_points_csv(&points, args.no_header)?,
        OutputFormat::Text => format_points_text(&points)?,
    };

    print!("{}", formatted);

    Ok(())
}

fn parse_datetime(s: &str) -> Result<OffsetDateTime> {
    // Try RFC3339 first
    if let Ok(dt) = OffsetDateTime::parse(s, &time::format_description::well_known::Rfc3339) {
        return Ok(dt);
    }

    // Try date only (YYYY-MM-DD)
    let format = time::format_description::parse("[year]-[month]-[day]")?;
    if let Ok(date) = time::Date::parse(s, &format) {
        return Ok(date.with_hms(0, 0, 0)?.assume_utc());
    }

    anyhow::bail!("Invalid date/time format: {}. Use RFC3339 or YYYY-MM-DD", s)
}
