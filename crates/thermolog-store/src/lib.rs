//! Local persistence for synthetic temperature points.
//!
//! This crate provides SQLite-based storage for timestamped temperature
//! readings, with batch insert and time-range queries.
//!
//! # Features
//!
//! - Store points with second-resolution timestamps
//! - All-or-nothing batch inserts
//! - Query by time range, with pagination
//! - Whole-series summary (first/last, duration, middle-third selection)
//!
//! # Example
//!
//! ```no_run
//! use thermolog_store::{PointQuery, Store};
//!
//! let store = Store::open("foo.db")?;
//!
//! // Query the ten most recent points
//! let query = PointQuery::new().limit(10);
//! let points = store.query_points(&query)?;
//! # Ok::<(), thermolog_store::Error>(())
//! ```

mod error;
mod models;
mod queries;
mod schema;
mod store;

pub use error::{Error, Result};
pub use models::{NewPoint, StoredPoint};
pub use queries::PointQuery;
pub use store::{RangeSummary, Store};
