use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::tag::TagList;
use crate::errors::{PostError, Result};

/// Validated input for creating a post
///
/// Title and content are trimmed and must be non-empty. Tags are already
/// normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub tags: TagList,
}

impl NewPost {
    /// Build a new post from raw user input
    ///
    /// # Errors
    ///
    /// Returns `InvalidTitle` if the title is blank, or `InvalidContent` if the
    /// content is blank.
    pub fn new(title: &str, content: &str, raw_tags: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PostError::InvalidTitle {
                reason: "title cannot be empty".to_string(),
            });
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(PostError::InvalidContent {
                reason: "content cannot be empty".to_string(),
            });
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            tags: TagList::parse(raw_tags),
        })
    }
}

/// A stored post with its tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Insert time; used only for ordering
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// One row of the post listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
}
