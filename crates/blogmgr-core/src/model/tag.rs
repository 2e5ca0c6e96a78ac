use serde::{Deserialize, Serialize};

/// A stored tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    /// Always trimmed and lowercase
    pub name: String,
}

/// Normalize a single tag name: trim surrounding whitespace and lowercase.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Ordered, duplicate-free list of normalized tag names
///
/// Order of first appearance is kept for display. `"Go, WEB, go"` parses to
/// `["go", "web"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Parse a comma-separated tag string
    pub fn parse(raw: &str) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in raw.split(',').filter_map(normalize_tag) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self(names)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TagList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
