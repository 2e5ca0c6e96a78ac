//! Read-only post queries

pub mod post_queries;

pub use post_queries::{list_posts, search_by_tag, view_post};
