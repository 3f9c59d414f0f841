//! Post records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::FrontMatter;

/// A post as listed in the generated post data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// URL the post is served at, base path included once loaded
    pub url: String,

    pub frontmatter: FrontMatter,

    /// Raw markdown body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Rendered HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Rendered text before the excerpt separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Docs-relative source path
    #[serde(skip)]
    pub source: String,

    /// Parsed front-matter date
    #[serde(skip)]
    pub date: Option<DateTime<Local>>,
}

impl PostRecord {
    pub fn new(url: String, frontmatter: FrontMatter, source: String) -> Self {
        let date = frontmatter.parse_date();
        Self {
            url,
            frontmatter,
            src: None,
            html: None,
            excerpt: None,
            source,
            date,
        }
    }

    /// Title from front-matter, falling back to the file stem
    pub fn title(&self) -> &str {
        self.frontmatter.title.as_deref().unwrap_or_else(|| {
            let name = self.source.rsplit('/').next().unwrap_or(&self.source);
            name.strip_suffix(".md").unwrap_or(name)
        })
    }

    /// Newest first; undated posts after every dated one
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        other.date.cmp(&self.date)
    }
}
