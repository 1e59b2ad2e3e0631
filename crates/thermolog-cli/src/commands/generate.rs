//! Generate command - synthesize a batch of points.

use std::path::Path;

use anyhow::{Context, Result};
use time::{Duration, OffsetDateTime};
use tracing::info;

use thermolog_store::{NewPoint, Store};

/// Temperature recorded for every synthetic point.
const SYNTHETIC_TEMPERATURE: f64 = 20.5;

/// Execute the generate command.
pub fn cmd_generate(filename: &Path, number_of_points: u32) -> Result<()> {
    let mut store = Store::open(filename)
        .with_context(|| format!("Failed to open database at {}", filename.display()))?;

    let start = OffsetDateTime::now_utc();
    info!("Generating {} points", number_of_points);
    let points = synthetic_series(start, number_of_points);

    let inserted = store
        .insert_points(&points)
        .context("Failed to insert point batch")?;
    info!("Committed {} points", inserted);

    println!("Inserted {} points into {}", inserted, filename.display());

    Ok(())
}

/// Build `n` points spaced one second apart, starting at `start`.
fn synthetic_series(start: OffsetDateTime, n: u32) -> Vec<NewPoint> {
    (0..n)
        .map(|k| NewPoint {
            time: start + Duration::seconds(i64::from(k)),
            temperature: SYNTHETIC_TEMPERATURE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_series_has_fixed_temperature() {
        let points = synthetic_series(datetime!(2024-01-01 00:00:00 UTC), 5);
        assert_eq!(points.len(), 5);
        assert!(points.iter().all(|p| p.temperature == 20.5));
    }

    #[test]
    fn test_series_is_spaced_one_second_apart() {
        let points = synthetic_series(datetime!(2024-01-01 00:00:00 UTC), 100);
        for pair in points.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, Duration::SECOND);
        }
    }

    #[test]
    fn test_series_of_zero_is_empty() {
        let points = synthetic_series(datetime!(2024-01-01 00:00:00 UTC), 0);
        assert!(points.is_empty());
    }
}
