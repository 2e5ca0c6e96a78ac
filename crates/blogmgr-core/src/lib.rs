//! blogmgr core - domain model and shared facilities
//!
//! This crate provides:
//! - Post and tag models, including tag normalization
//! - The structured error facility (`BlogError`, `BlogErrorKind`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{BlogError, BlogErrorKind, PostError, Result};
pub use model::{normalize_tag, NewPost, Post, PostSummary, Tag, TagList};
