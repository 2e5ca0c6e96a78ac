//! SQLite post repository
//!
//! Creates a post and its tag links as one transaction

use crate::errors::{from_rusqlite, is_unique_violation, Result};
use blogmgr_core::errors::{BlogError, PostError};
use blogmgr_core::model::{NewPost, Post, Tag};
use blogmgr_core::{log_op_end, log_op_error, log_op_start};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Transaction};

const OP: &str = "create_post";

/// SQLite repository for posts and tags
pub struct PostRepo;

impl PostRepo {
    /// Create a post, its missing tags and the post/tag links atomically
    ///
    /// Nothing is persisted unless every step succeeds.
    ///
    /// # Errors
    ///
    /// - `DuplicateTitle` if a post with the same title exists
    /// - `Persistence` / `StoreUnavailable` if SQLite fails
    pub fn create_post(conn: &mut Connection, new_post: &NewPost) -> Result<Post> {
        log_op_start!(
            OP,
            title = new_post.title.as_str(),
            tag_count = new_post.tags.len()
        );
        let start = std::time::Instant::now();

        let result = Self::create_post_in_tx(conn, new_post);

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(post) => log_op_end!(OP, duration_ms = elapsed, post_id = post.id),
            Err(e) => log_op_error!(OP, e.clone(), duration_ms = elapsed),
        }
        result
    }

    fn create_post_in_tx(conn: &mut Connection, new_post: &NewPost) -> Result<Post> {
        // Dropping `tx` without commit rolls back, so every `?` below is atomic
        let tx = conn.transaction().map_err(|e| from_rusqlite(OP, e))?;
        let created_at = Utc::now();

        let post_id = Self::insert_post_tx(&tx, new_post, created_at)?;
        for name in new_post.tags.as_slice() {
            let tag = Self::upsert_tag_tx(&tx, name)?;
            Self::link_tag_tx(&tx, post_id, tag.id)?;
        }

        tx.commit().map_err(|e| from_rusqlite(OP, e))?;

        Ok(Post {
            id: post_id,
            title: new_post.title.clone(),
            content: new_post.content.clone(),
            created_at,
            tags: new_post.tags.as_slice().to_vec(),
        })
    }

    /// Insert the post row within a transaction, returning its id
    fn insert_post_tx(tx: &Transaction, new_post: &NewPost, created_at: DateTime<Utc>) -> Result<i64> {
        tx.execute(
            "INSERT INTO posts (title, content, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                new_post.title,
                new_post.content,
                created_at.timestamp_millis()
            ],
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                BlogError::from(PostError::DuplicateTitle {
                    title: new_post.title.clone(),
                })
            } else {
                from_rusqlite(OP, e)
            }
        })?;

        Ok(tx.last_insert_rowid())
    }

    /// Insert the tag if absent and return it, in one statement
    fn upsert_tag_tx(tx: &Transaction, name: &str) -> Result<Tag> {
        tx.query_row(
            "INSERT INTO tags (name) VALUES (?1)
             ON CONFLICT(name) DO UPDATE SET name = excluded.name
             RETURNING id, name",
            [name],
            |row| {
                Ok(Tag {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .map_err(|e| from_rusqlite(OP, e))
    }

    fn link_tag_tx(tx: &Transaction, post_id: i64, tag_id: i64) -> Result<()> {
        tx.execute(
            "INSERT INTO post_tags (post_id, tag_id) VALUES (?1, ?2)",
            rusqlite::params![post_id, tag_id],
        )
        .map_err(|e| from_rusqlite(OP, e))?;

        Ok(())
    }
}
