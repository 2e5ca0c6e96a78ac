pub mod post;
pub mod tag;

pub use post::{NewPost, Post, PostSummary};
pub use tag::{normalize_tag, Tag, TagList};
