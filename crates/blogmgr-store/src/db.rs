//! Database connection management
//!
//! Opens and configures the single SQLite connection the process holds.

use crate::errors::{from_rusqlite, store_unavailable, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| store_unavailable(&path.display().to_string(), e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| store_unavailable(":memory:", e))
}

/// Configure a connection for the blog schema
pub fn configure(conn: &Connection) -> Result<()> {
    // SQLite leaves foreign keys off per connection; cascades need them on
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| from_rusqlite("configure_store", e))?;

    Ok(())
}
