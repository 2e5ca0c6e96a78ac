//! Store handle
//!
//! `BlogStore` owns the one connection the process holds. It is opened once
//! at startup (configure + schema) and released either explicitly through
//! [`BlogStore::close`] or on drop.

use crate::errors::{from_rusqlite, Result};
use crate::queries;
use crate::repo::PostRepo;
use crate::{db, schema};
use blogmgr_core::model::{NewPost, Post, PostSummary};
use blogmgr_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;
use std::path::Path;

/// Handle to an initialized blog database
pub struct BlogStore {
    conn: Connection,
    location: String,
}

impl BlogStore {
    /// Open (creating if needed) the database file and initialize its schema
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the file cannot be opened, or
    /// `Persistence` if the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let location = path.as_ref().display().to_string();
        Self::initialize(location, || db::open(path))
    }

    /// Open a fresh in-memory database (for testing)
    ///
    /// # Errors
    ///
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self> {
        Self::initialize(":memory:".to_string(), db::open_in_memory)
    }

    fn initialize<F>(location: String, connect: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Connection>,
    {
        log_op_start!("open_store", location = location.as_str());
        let start = std::time::Instant::now();

        let result = connect().and_then(|mut conn| {
            db::configure(&conn)?;
            schema::initialize(&mut conn)?;
            Ok(conn)
        });

        let elapsed = start.elapsed().as_millis() as u64;
        match result {
            Ok(conn) => {
                log_op_end!("open_store", duration_ms = elapsed);
                Ok(Self { conn, location })
            }
            Err(e) => {
                log_op_error!("open_store", e.clone(), duration_ms = elapsed);
                Err(e)
            }
        }
    }

    /// Validate raw input and create the post atomically
    ///
    /// # Errors
    ///
    /// `InvalidTitle` / `InvalidInput` for blank fields, `DuplicateTitle` if
    /// the title is taken, or a store error. Nothing is persisted on error.
    pub fn create_post(&mut self, title: &str, content: &str, raw_tags: &str) -> Result<Post> {
        let new_post = NewPost::new(title, content, raw_tags)?;
        PostRepo::create_post(&mut self.conn, &new_post)
    }

    /// All posts, most recent first
    ///
    /// # Errors
    ///
    /// Returns a store error if the query fails.
    pub fn list_posts(&self) -> Result<Vec<PostSummary>> {
        queries::list_posts(&self.conn)
    }

    /// A post and its tags by exact title; `None` if there is no such post
    ///
    /// # Errors
    ///
    /// Returns a store error if the query fails.
    pub fn view_post(&self, title: &str) -> Result<Option<Post>> {
        queries::view_post(&self.conn, title)
    }

    /// Titles tagged with `tag_name` (normalized before lookup), most recent first
    ///
    /// # Errors
    ///
    /// Returns a store error if the query fails.
    pub fn search_by_tag(&self, tag_name: &str) -> Result<Vec<String>> {
        queries::search_by_tag(&self.conn, tag_name)
    }

    /// Where this store lives (file path or `:memory:`)
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection, reporting any error SQLite raises while closing
    ///
    /// # Errors
    ///
    /// Returns a store error if SQLite refuses to close; the connection is
    /// still dropped.
    pub fn close(self) -> Result<()> {
        tracing::debug!(location = self.location.as_str(), "closing store");
        self.conn.close().map_err(|(_conn, e)| from_rusqlite("close_store", e))
    }
}
