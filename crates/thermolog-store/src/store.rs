//! Main store implementation.

use std::path::Path;

use rusqlite::Connection;
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{NewPoint, StoredPoint, decode_timestamp, encode_bound, encode_timestamp};
use crate::queries::PointQuery;
use crate::schema;

/// SQLite-based store for temperature points.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create a database at the given path.
    ///
    /// The schema is created on first open and left untouched afterwards.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        schema::initialize(&conn)?;

        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }
}

// Write operations
impl Store {
    /// Insert a batch of points in one transaction.
    ///
    /// Either every point is durably visible afterwards or none is: any
    /// failure rolls the whole batch back. An empty batch commits as a
    /// no-op. Ids are assigned by SQLite; they are unique but carry no
    /// ordering promise within the batch.
    pub fn insert_points(&mut self, points: &[NewPoint]) -> Result<usize> {
        let tx = self
            .conn
            .transaction()
            .map_err(|source| Error::InsertBatch { source })?;

        {
            let mut stmt = tx
                .prepare("INSERT INTO points (time, temperature) VALUES (?1, ?2)")
                .map_err(|source| Error::InsertBatch { source })?;

            for point in points {
                stmt.execute(rusqlite::params![
                    encode_timestamp(point.time),
                    point.temperature
                ])
                .map_err(|source| Error::InsertBatch { source })?;
            }
        }

        tx.commit().map_err(|source| Error::InsertBatch { source })?;

        debug!("Committed batch of {} points", points.len());
        Ok(points.len())
    }
}

// Read operations
impl Store {
    /// Query points with filters.
    pub fn query_points(&self, query: &PointQuery) -> Result<Vec<StoredPoint>> {
        let sql = query.build_sql();
        let (_, params) = query.build_where();

        debug!("Executing query: {}", sql);

        let params_ref: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let points = stmt
            .query_map(params_ref.as_slice(), |row| {
                Ok(StoredPoint {
                    id: row.get(0)?,
                    time: decode_timestamp(row.get(1)?),
                    temperature: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(points)
    }

    /// Get the point with the minimum time, if any.
    pub fn first(&self) -> Result<Option<StoredPoint>> {
        let mut points = self.query_points(&PointQuery::new().oldest_first().limit(1))?;
        Ok(points.pop())
    }

    /// Get the point with the maximum time, if any.
    ///
    /// Ties on time resolve to the lowest id, so the result is stable for a
    /// given store state.
    pub fn last(&self) -> Result<Option<StoredPoint>> {
        let mut points = self.query_points(&PointQuery::new().limit(1))?;
        Ok(points.pop())
    }

    /// Get the earliest point in the inclusive interval `[lo, hi]`, if any.
    pub fn first_between(
        &self,
        lo: OffsetDateTime,
        hi: OffsetDateTime,
    ) -> Result<Option<StoredPoint>> {
        let query = PointQuery::new().since(lo).until(hi).oldest_first().limit(1);
        let mut points = self.query_points(&query)?;
        Ok(points.pop())
    }

    /// Count all points.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM points", [], |row| row.get(0))?;

        Ok(count as u64)
    }

    /// Count points in the inclusive interval `[lo, hi]`.
    ///
    /// An inverted interval (`lo > hi`) matches nothing and returns 0.
    pub fn count_between(&self, lo: OffsetDateTime, hi: OffsetDateTime) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM points WHERE time >= ?1 AND time <= ?2",
            rusqlite::params![encode_bound(lo), encode_bound(hi)],
            |row| row.get(0),
        )?;

        Ok(count as u64)
    }
}

/// Whole-series summary: extremes, duration, and the middle-third selection.
#[derive(Debug, Clone, Serialize)]
pub struct RangeSummary {
    /// Point with the minimum time.
    pub first: StoredPoint,
    /// Point with the maximum time.
    pub last: StoredPoint,
    /// Covered duration in seconds.
    pub duration_seconds: f64,
    /// Total number of points.
    pub total: u64,
    /// Start of the middle-third window.
    #[serde(with = "time::serde::rfc3339")]
    pub window_start: OffsetDateTime,
    /// End of the middle-third window.
    #[serde(with = "time::serde::rfc3339")]
    pub window_end: OffsetDateTime,
    /// Number of points inside the window.
    pub selected: u64,
    /// Earliest point inside the window.
    pub selected_first: Option<StoredPoint>,
}

// Summary operations
impl Store {
    /// Summarize the stored series.
    ///
    /// The selection window spans the middle third of the covered time
    /// range: `[first + duration/3, last - duration/3]`, computed with
    /// real-valued division, so its edges need not align to whole seconds.
    ///
    /// Returns [`Error::EmptyStore`] when the store has no points.
    pub fn summarize(&self) -> Result<RangeSummary> {
        let first = self.first()?.ok_or(Error::EmptyStore)?;
        let last = self.last()?.ok_or(Error::EmptyStore)?;

        let duration_seconds = (last.time - first.time).as_seconds_f64();
        let total = self.count()?;

        let third = Duration::seconds_f64(duration_seconds / 3.0);
        let window_start = first.time + third;
        let window_end = last.time - third;

        let selected = self.count_between(window_start, window_end)?;
        let selected_first = self.first_between(window_start, window_end)?;

        Ok(RangeSummary {
            first,
            last,
            duration_seconds,
            total,
            window_start,
            window_end,
            selected,
            selected_first,
        })
    }
}
