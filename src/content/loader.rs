//! Content loader - ingests seed data into strict article records
//!
//! Seed documents are loosely typed: ids may be numbers or numeric
//! strings, `content` may be a paragraph list or one blank-line separated
//! string, `tags` may be a list or a comma-separated string, and dates may
//! carry a time part. Everything is checked here, at the boundary, and a
//! record that cannot be converted is reported as a transport error.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Article, ArticleId, Catalog, Comment};
use crate::error::CatalogError;
use crate::Blog;

/// Serialization format of a seed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yml") | Some("yaml") => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawList {
    Items(Vec<String>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawComment {
    id: Option<RawId>,
    author: Option<String>,
    text: Option<String>,
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    id: Option<RawId>,
    title: Option<String>,
    excerpt: Option<String>,
    content: Option<RawList>,
    date: Option<String>,
    category: Option<String>,
    tags: Option<RawList>,
    #[serde(rename = "readTime", alias = "read_time")]
    read_time: Option<String>,
    author: Option<String>,
    #[serde(default)]
    comments: Vec<RawComment>,
}

/// Split a document into its records: a list, an `articles` list, or a
/// single record.
fn split_records(document: Value) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(mut map) if matches!(map.get("articles"), Some(Value::Array(_))) => {
            match map.remove("articles") {
                Some(Value::Array(records)) => records,
                _ => Vec::new(),
            }
        }
        other => vec![other],
    }
}

/// Parse a seed document into validated articles
///
/// Each record is decoded on its own, so a malformed record is reported
/// with its index rather than as a failure of the whole document.
pub fn parse_articles(
    content: &str,
    format: Format,
    origin: &str,
) -> std::result::Result<Vec<Article>, CatalogError> {
    let document: Value = match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::transport(origin, e.to_string()))?,
        Format::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CatalogError::transport(origin, e.to_string()))?,
    };

    split_records(document)
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let origin = format!("{}#{}", origin, idx);
            let raw: RawArticle = serde_json::from_value(record)
                .map_err(|e| CatalogError::transport(origin.as_str(), e.to_string()))?;
            convert_article(raw, &origin)
        })
        .collect()
}

/// Loads the catalog from the configured source file or directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all articles, in document order
    pub fn load_articles(&self) -> Result<Vec<Article>> {
        let source = &self.blog.source_path;
        if !source.exists() {
            tracing::warn!("Source {:?} does not exist, catalog is empty", source);
            return Ok(Vec::new());
        }

        if source.is_file() {
            return load_file(source);
        }

        let mut articles = Vec::new();
        for entry in WalkDir::new(source)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || Format::from_path(path).is_none() {
                continue;
            }
            match load_file(path) {
                Ok(mut loaded) => articles.append(&mut loaded),
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {:#}", path, e);
                }
            }
        }

        Ok(articles)
    }

    /// Load articles and build the catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        let articles = self.load_articles()?;
        tracing::info!("Loaded {} articles", articles.len());
        Ok(Catalog::new(articles)?)
    }
}

fn load_file(path: &Path) -> Result<Vec<Article>> {
    let format = Format::from_path(path)
        .with_context(|| format!("Unsupported seed file extension: {:?}", path))?;
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let articles = parse_articles(&content, format, &path.to_string_lossy())?;
    tracing::debug!("Loaded {} articles from {:?}", articles.len(), path);
    Ok(articles)
}

fn convert_article(raw: RawArticle, record: &str) -> std::result::Result<Article, CatalogError> {
    let fail = |reason: String| CatalogError::transport(record, reason);

    let id = parse_id(raw.id, "id").map_err(fail)?;
    let title = required(raw.title, "title").map_err(fail)?;
    let category = required(raw.category, "category").map_err(fail)?;
    let date = raw
        .date
        .as_deref()
        .ok_or_else(|| "missing date".to_string())
        .and_then(parse_date)
        .map_err(fail)?;

    let content = match raw.content {
        Some(RawList::Items(paragraphs)) => paragraphs,
        Some(RawList::Text(text)) => split_paragraphs(&text),
        None => Vec::new(),
    };
    let tags: Vec<String> = match raw.tags {
        Some(RawList::Items(tags)) => tags.into_iter().map(|t| t.trim().to_string()).collect(),
        Some(RawList::Text(text)) => text.split(',').map(|t| t.trim().to_string()).collect(),
        None => Vec::new(),
    };

    let comments = raw
        .comments
        .into_iter()
        .enumerate()
        .map(|(idx, c)| {
            convert_comment(c).map_err(|reason| fail(format!("comment {}: {}", idx, reason)))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut article = Article::new(id, title, date)
        .with_category(category)
        .with_tags(tags.into_iter().filter(|t| !t.is_empty()));
    article.excerpt = raw.excerpt.unwrap_or_default();
    article.content = content;
    article.read_time = raw.read_time.unwrap_or_default();
    article.author = raw.author.unwrap_or_default();
    article.comments = comments;
    Ok(article)
}

fn convert_comment(raw: RawComment) -> std::result::Result<Comment, String> {
    Ok(Comment {
        id: parse_id(raw.id, "id")?,
        author: required(raw.author, "author")?,
        text: required(raw.text, "text")?,
        date: parse_date(raw.date.as_deref().ok_or("missing date")?)?,
    })
}

fn parse_id(raw: Option<RawId>, field: &str) -> std::result::Result<u64, String> {
    let parsed = match raw {
        Some(RawId::Number(n)) if n > 0 => Some(n as u64),
        Some(RawId::Number(_)) => None,
        Some(RawId::Text(s)) => ArticleId::parse(&s).map(|id| id.0),
        None => return Err(format!("missing {}", field)),
    };
    parsed.ok_or_else(|| format!("{} must be a positive integer", field))
}

fn required(value: Option<String>, field: &str) -> std::result::Result<String, String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(format!("missing {}", field)),
    }
}

/// Accepts `2024-10-20`, `2024-10-20T12:00:00[.fff]` and RFC 3339 timestamps
fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid date {:?}", value))
}

/// Split a body on blank lines into trimmed, non-empty paragraphs
fn split_paragraphs(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
