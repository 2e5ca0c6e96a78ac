//! Error handling for blogmgr-store
//!
//! Maps rusqlite failures onto the core `BlogError` taxonomy

use blogmgr_core::errors::{BlogError, BlogErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;

/// Create an error for a database that cannot be opened or reached
pub fn store_unavailable(target: &str, err: rusqlite::Error) -> BlogError {
    BlogError::new(BlogErrorKind::StoreUnavailable)
        .with_op("open_store")
        .with_message(format!("cannot open database {}: {}", target, err))
}

/// Create a schema initialization error
pub fn schema_error(reason: &str) -> BlogError {
    BlogError::new(BlogErrorKind::Persistence)
        .with_op("init_schema")
        .with_message(format!("Schema initialization failed: {}", reason))
}

/// Create a database error from rusqlite::Error, tagged with the failing operation
///
/// Failures that mean the database file itself is unusable are classified as
/// `StoreUnavailable`; everything else is `Persistence`.
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> BlogError {
    let kind = match sqlite_code(&err) {
        Some(
            ErrorCode::CannotOpen
            | ErrorCode::NotADatabase
            | ErrorCode::PermissionDenied
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::SystemIoFailure,
        ) => BlogErrorKind::StoreUnavailable,
        _ => BlogErrorKind::Persistence,
    };

    BlogError::new(kind)
        .with_op(op)
        .with_message(err.to_string())
}

/// True if the error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

fn sqlite_code(err: &rusqlite::Error) -> Option<ErrorCode> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => Some(e.code),
        _ => None,
    }
}
