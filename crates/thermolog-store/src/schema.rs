//! Database schema management.

use rusqlite::Connection;

use crate::error::Result;

/// Create the points table if it does not exist.
///
/// Idempotent: calling it on every open leaves existing data untouched.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS points (
            id INTEGER PRIMARY KEY,
            time INTEGER NOT NULL,
            temperature REAL NOT NULL
        );
        "#,
    )?;

    Ok(())
}
