//! Query builder for stored points.
//!
//! [`PointQuery`] follows the builder pattern for filtering and paginating
//! points by time.
//!
//! # Example
//!
//! ```
//! use thermolog_store::{PointQuery, Store};
//! use time::{Duration, OffsetDateTime};
//!
//! let store = Store::open_in_memory()?;
//! let hour_ago = OffsetDateTime::now_utc() - Duration::hours(1);
//!
//! // Query the last hour's points, oldest first
//! let query = PointQuery::new().since(hour_ago).oldest_first().limit(50);
//! let points = store.query_points(&query)?;
//! # Ok::<(), thermolog_store::Error>(())
//! ```

use time::OffsetDateTime;

use crate::models::encode_bound;

/// Fluent query builder for stored points.
///
/// All filter methods are optional and can be chained in any order. By
/// default, queries return results ordered by `time` descending (newest
/// first). Time bounds are inclusive on both ends.
#[derive(Debug, Default, Clone)]
pub struct PointQuery {
    /// Include only points at or after this time.
    pub since: Option<OffsetDateTime>,
    /// Include only points at or before this time.
    pub until: Option<OffsetDateTime>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
    /// Order by time descending (newest first).
    pub newest_first: bool,
}

impl PointQuery {
    /// Create a new query with default settings.
    ///
    /// Default behavior:
    /// - No time range filter
    /// - No limit (all matching points)
    /// - Ordered by newest first
    pub fn new() -> Self {
        Self {
            newest_first: true,
            ..Default::default()
        }
    }

    /// Filter to points at or after this time.
    pub fn since(mut self, time: OffsetDateTime) -> Self {
        self.since = Some(time);
        self
    }

    /// Filter to points at or before this time.
    ///
    /// Use with `since()` to query a specific time range.
    pub fn until(mut self, time: OffsetDateTime) -> Self {
        self.until = Some(time);
        self
    }

    /// Limit the maximum number of results returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first N results.
    ///
    /// Use with `limit()` for pagination.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Order results by oldest first (ascending by `time`).
    ///
    /// By default, queries return newest first. Use this for chronological
    /// ordering, useful when listing or processing data sequentially.
    pub fn oldest_first(mut self) -> Self {
        self.newest_first = false;
        self
    }

    /// Build the SQL WHERE clause and parameters.
    pub(crate) fn build_where(&self) -> (String, Vec<Box<dyn rusqlite::ToSql>>) {
        let mut conditions = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(since) = self.since {
            conditions.push("time >= ?");
            params.push(Box::new(encode_bound(since)));
        }

        if let Some(until) = self.until {
            conditions.push("time <= ?");
            params.push(Box::new(encode_bound(until)));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (where_clause, params)
    }

    /// Build the full SQL query.
    ///
    /// Ties on `time` are broken by `id` so results are deterministic for a
    /// given store state.
    pub(crate) fn build_sql(&self) -> String {
        let (where_clause, _) = self.build_where();
        let order = if self.newest_first { "DESC" } else { "ASC" };

        let mut sql = format!(
            "SELECT id, time, temperature FROM points {} ORDER BY time {}, id ASC",
            where_clause, order
        );

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }
}
