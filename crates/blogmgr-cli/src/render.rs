//! Human-readable output for the command loop

use blogmgr_core::errors::BlogError;
use blogmgr_core::model::{Post, PostSummary};
use std::io::{self, Write};

pub fn created<W: Write>(out: &mut W, post: &Post) -> io::Result<()> {
    writeln!(
        out,
        "Post '{}' created successfully with tags: {}",
        post.title,
        post.tags.join(", ")
    )
}

pub fn post_list<W: Write>(out: &mut W, posts: &[PostSummary]) -> io::Result<()> {
    if posts.is_empty() {
        return writeln!(out, "No posts found.");
    }

    writeln!(out, "\nAll Posts:")?;
    for post in posts {
        writeln!(out, "{}. {}", post.id, post.title)?;
    }
    writeln!(out)
}

pub fn post<W: Write>(out: &mut W, post: &Post) -> io::Result<()> {
    writeln!(out, "\n{}", post.title)?;
    writeln!(out, "{}", "=".repeat(post.title.chars().count()))?;
    writeln!(out, "{}", post.content)?;

    let tags = if post.tags.is_empty() {
        "No tags".to_string()
    } else {
        post.tags.join(", ")
    };
    writeln!(out, "\nTags: {}\n", tags)
}

pub fn not_found<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "Post '{}' not found.", title)
}

pub fn search_results<W: Write>(out: &mut W, tag: &str, titles: &[String]) -> io::Result<()> {
    if titles.is_empty() {
        return writeln!(out, "No posts found with tag '{}'.", tag);
    }

    writeln!(out, "\nPosts tagged with '{}':", tag)?;
    for title in titles {
        writeln!(out, "- {}", title)?;
    }
    writeln!(out)
}

/// `Error <doing>: <message>`, preferring the plain message over the coded form
pub fn error<W: Write>(out: &mut W, doing: &str, err: &BlogError) -> io::Result<()> {
    if err.message().is_empty() {
        writeln!(out, "Error {}: {}", doing, err)
    } else {
        writeln!(out, "Error {}: {}", doing, err.message())
    }
}
