//! Read-only post query operations.
//!
//! Listing and searching order by creation time, most recent first, with the
//! row id breaking ties between posts created in the same millisecond. None of
//! these functions write to the database.

use crate::errors::{from_rusqlite, Result};
use blogmgr_core::model::{normalize_tag, Post, PostSummary};
use blogmgr_core::{log_op_end, log_op_error, log_op_start};
use chrono::{TimeZone, Utc};
use rusqlite::{Connection, OptionalExtension};

/// List every post as `(id, title)`, most recent first.
///
/// An empty database yields an empty vector.
///
/// # Errors
///
/// - `Persistence` / `StoreUnavailable`: SQLite query failed
pub fn list_posts(conn: &Connection) -> Result<Vec<PostSummary>> {
    log_op_start!("list_posts");
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<PostSummary>> {
        let mut stmt = conn
            .prepare("SELECT id, title FROM posts ORDER BY created_at DESC, id DESC")
            .map_err(|e| from_rusqlite("list_posts", e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PostSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })
            .map_err(|e| from_rusqlite("list_posts", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_posts", e))?;
        Ok(rows)
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(rows) => log_op_end!("list_posts", duration_ms = elapsed, row_count = rows.len()),
        Err(e) => log_op_error!("list_posts", e.clone(), duration_ms = elapsed),
    }
    result
}

/// Fetch a post and its tags by exact (case-sensitive) title.
///
/// Returns `Ok(None)` when no post has that title. Tags come back sorted by
/// name.
///
/// # Errors
///
/// - `Persistence` / `StoreUnavailable`: SQLite query failed
pub fn view_post(conn: &Connection, title: &str) -> Result<Option<Post>> {
    log_op_start!("view_post", title = title);
    let start = std::time::Instant::now();

    let result = (|| -> Result<Option<Post>> {
        let row = conn
            .query_row(
                "SELECT id, title, content, created_at FROM posts WHERE title = ?1",
                [title],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| from_rusqlite("view_post", e))?;

        let Some((id, title, content, created_at_ms)) = row else {
            return Ok(None);
        };

        let tags = fetch_tag_names(conn, id)?;
        Ok(Some(Post {
            id,
            title,
            content,
            created_at: Utc
                .timestamp_millis_opt(created_at_ms)
                .single()
                .unwrap_or_default(),
            tags,
        }))
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(post) => log_op_end!("view_post", duration_ms = elapsed, found = post.is_some()),
        Err(e) => log_op_error!("view_post", e.clone(), duration_ms = elapsed),
    }
    result
}

/// Titles of posts carrying the given tag, most recent first.
///
/// The tag name is trimmed and lowercased before lookup; a blank name
/// matches nothing.
///
/// # Errors
///
/// - `Persistence` / `StoreUnavailable`: SQLite query failed
pub fn search_by_tag(conn: &Connection, tag_name: &str) -> Result<Vec<String>> {
    let Some(tag) = normalize_tag(tag_name) else {
        return Ok(Vec::new());
    };

    log_op_start!("search_by_tag", tag = tag.as_str());
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare(
                "SELECT p.title FROM posts p
                 JOIN post_tags pt ON p.id = pt.post_id
                 JOIN tags t ON pt.tag_id = t.id
                 WHERE t.name = ?1
                 ORDER BY p.created_at DESC, p.id DESC",
            )
            .map_err(|e| from_rusqlite("search_by_tag", e))?;
        let titles = stmt
            .query_map([tag.as_str()], |row| row.get::<_, String>(0))
            .map_err(|e| from_rusqlite("search_by_tag", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("search_by_tag", e))?;
        Ok(titles)
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(titles) => log_op_end!(
            "search_by_tag",
            duration_ms = elapsed,
            row_count = titles.len()
        ),
        Err(e) => log_op_error!("search_by_tag", e.clone(), duration_ms = elapsed),
    }
    result
}

fn fetch_tag_names(conn: &Connection, post_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT t.name FROM tags t
             JOIN post_tags pt ON t.id = pt.tag_id
             WHERE pt.post_id = ?1
             ORDER BY t.name",
        )
        .map_err(|e| from_rusqlite("search_by_tag", e))?;
    let names = stmt
        .query_map([post_id], |row| row.get::<_, String>(0))
        .map_err(|e| from_rusqlite("search_by_tag", e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite("search_by_tag", e))?;
    Ok(names)
}
