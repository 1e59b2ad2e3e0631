//! Output formatting for points and summaries.

use anyhow::Result;
use thermolog_store::{RangeSummary, StoredPoint};
use time::format_description::well_known::Rfc3339;

/// One-line rendering of a single point.
pub fn format_point(point: &StoredPoint) -> Result<String> {
    Ok(format!(
        "#{}  {}  {} C",
        point.id,
        point.time.format(&Rfc3339)?,
        point.temperature
    ))
}

pub fn format_points_text(points: &[StoredPoint]) -> Result<String> {
    let mut out = String::new();
    for point in points {
        out.push_str(&format_point(point)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn format_points_json(points: &[StoredPoint]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(points)?;
    out.push('\n');
    Ok(out)
}

pub fn format_points_csv(points: &[StoredPoint], no_header: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if !no_header {
        writer.write_record(["id", "time", "temperature"])?;
    }

    for point in points {
        writer.write_record([
            point.id.to_string(),
            point.time.format(&Rfc3339)?,
            point.temperature.to_string(),
        ])?;
    }

    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

pub fn format_summary_text(summary: &RangeSummary) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("First point:    {}\n", format_point(&summary.first)?));
    out.push_str(&format!("Last point:     {}\n", format_point(&summary.last)?));
    out.push_str(&format!("Duration:       {} s\n", summary.duration_seconds));
    out.push_str(&format!("Total points:   {}\n", summary.total));
    out.push_str(&format!(
        "Middle third:   {} .. {}\n",
        summary.window_start.format(&Rfc3339)?,
        summary.window_end.format(&Rfc3339)?
    ));
    out.push_str(&format!("Selected:       {}\n", summary.selected));

    match &summary.selected_first {
        Some(point) => {
            out.push_str(&format!("First selected: {}\n", format_point(point)?));
        }
        None => {
            out.push_str("First selected: (none)\n");
        }
    }

    Ok(out)
}
