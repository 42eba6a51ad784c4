//! The catalog store: articles, queries and comment appends

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use std::collections::HashSet;

use super::{Article, ArticleId, CategoryFilter, Comment, MonthKey, NewComment, TagFilter};
use super::{Category, Tag};
use crate::error::{CatalogError, Result};

/// In-memory collection of all articles and their comments.
///
/// Articles keep the order they were loaded in; every listing query
/// reports them in that order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    articles: IndexMap<ArticleId, Article>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and required fields
    pub fn new(articles: impl IntoIterator<Item = Article>) -> Result<Self> {
        let mut map = IndexMap::new();

        for article in articles {
            validate_article(&article)?;
            let id = article.id;
            if map.insert(id, article).is_some() {
                return Err(CatalogError::Invalid(format!("duplicate article id {}", id)));
            }
        }

        tracing::debug!("Catalog built with {} articles", map.len());
        Ok(Self { articles: map })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All articles in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.values()
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(&id)
    }

    /// Look up an article from raw caller input (e.g. a URL segment)
    pub fn get_by_id(&self, id: &str) -> Result<&Article> {
        ArticleId::parse(id)
            .and_then(|id| self.get(id))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Articles matching both the category and the tag filter
    pub fn filter(&self, category: &CategoryFilter, tags: &TagFilter) -> Vec<&Article> {
        self.iter()
            .filter(|a| category.matches(a) && tags.matches(a))
            .collect()
    }

    /// Group articles by publication month.
    ///
    /// Months appear in the order they are first met while scanning the
    /// catalog, not in calendar order.
    pub fn group_by_month(&self) -> IndexMap<MonthKey, Vec<&Article>> {
        let mut groups: IndexMap<MonthKey, Vec<&Article>> = IndexMap::new();
        for article in self.iter() {
            groups
                .entry(MonthKey::of(&article.date))
                .or_default()
                .push(article);
        }
        groups
    }

    /// Distinct categories with counts, in first-encounter order
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: IndexMap<&str, Category> = IndexMap::new();
        for article in self.iter() {
            categories
                .entry(&article.category)
                .or_insert_with(|| Category::new(&article.category))
                .count += 1;
        }
        categories.into_values().collect()
    }

    /// Distinct tags with counts, in first-encounter order
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags: IndexMap<&str, Tag> = IndexMap::new();
        for article in self.iter() {
            for tag in &article.tags {
                tags.entry(tag).or_insert_with(|| Tag::new(tag)).count += 1;
            }
        }
        tags.into_values().collect()
    }

    /// Resolve a category URL slug back to its name
    pub fn category_by_slug(&self, slug: &str) -> Option<&str> {
        self.iter()
            .map(|a| a.category.as_str())
            .find(|c| slug::slugify(c) == slug)
    }

    /// Validate and append a comment dated today (local clock)
    pub fn append_comment(&mut self, id: ArticleId, author: &str, text: &str) -> Result<Comment> {
        self.append_comment_on(id, author, text, Local::now().date_naive())
    }

    /// Validate and append a comment with an explicit date.
    ///
    /// On error the catalog is left untouched.
    pub fn append_comment_on(
        &mut self,
        id: ArticleId,
        author: &str,
        text: &str,
        date: NaiveDate,
    ) -> Result<Comment> {
        let new_comment = NewComment::new(author, text)?;
        let article = self
            .articles
            .get_mut(&id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let comment = new_comment.attach(article, date)?;
        tracing::debug!("Added comment {} to article {}", comment.id, id);
        Ok(comment)
    }
}

fn validate_article(article: &Article) -> Result<()> {
    if article.id.0 == 0 {
        return Err(CatalogError::Invalid("article id must be positive".to_string()));
    }
    if article.category.trim().is_empty() {
        return Err(CatalogError::Invalid(format!(
            "article {} has an empty category",
            article.id
        )));
    }

    let mut seen = HashSet::new();
    for comment in &article.comments {
        if comment.id == u64::MAX {
            return Err(CatalogError::Invalid(format!(
                "article {} has comment id {} with no successor",
                article.id, comment.id
            )));
        }
        if !seen.insert(comment.id) {
            return Err(CatalogError::Invalid(format!(
                "article {} has duplicate comment id {}",
                article.id, comment.id
            )));
        }
    }
    Ok(())
}
