//! Data models for stored points.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A point that has not been persisted yet.
///
/// The store assigns the `id` at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    /// When this point was measured.
    pub time: OffsetDateTime,
    /// Temperature in Celsius.
    pub temperature: f64,
}

/// A point stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPoint {
    /// Database row ID.
    pub id: i64,
    /// When this point was measured.
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    /// Temperature in Celsius.
    pub temperature: f64,
}

/// Encode a timestamp as whole seconds since the Unix epoch.
///
/// Lossy below one-second resolution: sub-second precision is discarded.
pub(crate) fn encode_timestamp(time: OffsetDateTime) -> i64 {
    time.unix_timestamp()
}

/// Decode whole seconds since the Unix epoch into a UTC timestamp.
pub(crate) fn decode_timestamp(seconds: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(seconds).unwrap()
}

/// Encode a range bound with sub-second precision intact.
///
/// Bounds are bound as REAL so fractional instants compare against the
/// integer `time` column under SQLite's native numeric comparison.
pub(crate) fn encode_bound(time: OffsetDateTime) -> f64 {
    time.unix_timestamp_nanos() as f64 / 1e9
}
