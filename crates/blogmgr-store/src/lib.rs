//! blogmgr store - SQLite persistence for posts and tags
//!
//! Provides:
//! - Connection management and the idempotent schema initializer
//! - The post repository (atomic create-post with tag resolution)
//! - Read-only post queries (list, view by title, search by tag)
//! - `BlogStore`, the handle that owns the single connection

pub mod db;
pub mod errors;
pub mod handle;
pub mod queries;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use handle::BlogStore;
