//! Schema initializer
//!
//! The DDL is embedded at compile time and only uses `IF NOT EXISTS`
//! statements, so it is applied unconditionally on every startup.

use crate::errors::{from_rusqlite, schema_error, Result};
use blogmgr_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;

const BLOG_SCHEMA: &str = include_str!("../schema/blog_schema.sql");

/// Ensure the posts, tags and post_tags tables exist
///
/// Running against an already-initialized database is a no-op.
pub fn initialize(conn: &mut Connection) -> Result<()> {
    log_op_start!("init_schema");
    let start = std::time::Instant::now();

    let result = apply_schema(conn);

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("init_schema", duration_ms = elapsed),
        Err(e) => log_op_error!("init_schema", e.clone(), duration_ms = elapsed),
    }
    result
}

fn apply_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction().map_err(|e| from_rusqlite("init_schema", e))?;

    tx.execute_batch(BLOG_SCHEMA).map_err(|e| {
        let err = from_rusqlite("init_schema", e);
        if err.is_store_unavailable() {
            err
        } else {
            schema_error(err.message())
        }
    })?;

    tx.commit().map_err(|e| from_rusqlite("init_schema", e))?;
    Ok(())
}
