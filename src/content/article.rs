//! Article and Comment models

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable article identifier (positive integer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl ArticleId {
    /// Parse caller input such as a URL segment.
    ///
    /// Returns `None` for anything that is not a positive integer.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A comment attached to exactly one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique within the owning article
    pub id: u64,

    /// Comment author (trimmed, non-empty)
    pub author: String,

    /// Comment body (trimmed, non-empty)
    pub text: String,

    /// Submission date
    pub date: NaiveDate,
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier
    pub id: ArticleId,

    /// Article title
    pub title: String,

    /// Short teaser shown in listings
    pub excerpt: String,

    /// Body paragraphs in reading order
    pub content: Vec<String>,

    /// Publication date
    pub date: NaiveDate,

    /// Single category, never empty
    pub category: String,

    /// Tags, insertion order kept for display
    pub tags: IndexSet<String>,

    /// Display string such as "5 мин"
    pub read_time: String,

    /// Article author
    pub author: String,

    /// Comments in submission order
    pub comments: Vec<Comment>,
}

impl Article {
    /// Create a new article with minimal required fields
    pub fn new(id: u64, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: ArticleId(id),
            title: title.into(),
            excerpt: String::new(),
            content: Vec::new(),
            date,
            category: String::new(),
            tags: IndexSet::new(),
            read_time: String::new(),
            author: String::new(),
            comments: Vec::new(),
        }
    }

    /// Builder-style category setter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder-style tags setter
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the article carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Next free comment id (one past the largest in use), `None` once the
    /// id space is exhausted
    pub(crate) fn next_comment_id(&self) -> Option<u64> {
        self.comments.iter().map(|c| c.id).max().unwrap_or(0).checked_add(1)
    }

    /// Listing view without body and comments
    pub fn summary(&self) -> ArticleSummary<'_> {
        ArticleSummary {
            id: self.id,
            title: &self.title,
            excerpt: &self.excerpt,
            date: self.date,
            category: &self.category,
            tags: &self.tags,
            read_time: &self.read_time,
            author: &self.author,
        }
    }
}

/// Borrowed listing view of an article
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary<'a> {
    pub id: ArticleId,
    pub title: &'a str,
    pub excerpt: &'a str,
    pub date: NaiveDate,
    pub category: &'a str,
    pub tags: &'a IndexSet<String>,
    pub read_time: &'a str,
    pub author: &'a str,
}

/// A category with its article count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            count: 0,
        }
    }
}

/// A tag with its article count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug::slugify(name),
            count: 0,
        }
    }
}
