//! Comment submission: validation and attachment
//!
//! Comments are local-authoritative: the catalog assigns the id and date
//! itself, so once a submission passes validation and its article exists
//! the append fails only when the article has run out of comment ids.

use chrono::NaiveDate;

use super::{Article, Comment};
use crate::error::{CatalogError, Result};

/// A validated, not yet attached comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    author: String,
    text: String,
}

impl NewComment {
    /// Trim both fields and reject empty ones
    pub fn new(author: &str, text: &str) -> Result<Self> {
        let author = author.trim();
        if author.is_empty() {
            return Err(CatalogError::Validation { field: "author" });
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(CatalogError::Validation { field: "text" });
        }
        Ok(Self {
            author: author.to_string(),
            text: text.to_string(),
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append to the end of the article's list with a fresh id
    pub(crate) fn attach(self, article: &mut Article, date: NaiveDate) -> Result<Comment> {
        let id = article.next_comment_id().ok_or_else(|| {
            CatalogError::Invalid(format!("article {} has no free comment id", article.id))
        })?;
        let comment = Comment {
            id,
            author: self.author,
            text: self.text,
            date,
        };
        article.comments.push(comment.clone());
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_fields() {
        let c = NewComment::new("  Мария ", "\tТекст\n").unwrap();
        assert_eq!(c.author(), "Мария");
        assert_eq!(c.text(), "Текст");
    }

    #[test]
    fn test_rejects_blank_fields() {
        assert_eq!(
            NewComment::new("", "Текст"),
            Err(CatalogError::Validation { field: "author" })
        );
        assert_eq!(
            NewComment::new("Имя", "   "),
            Err(CatalogError::Validation { field: "text" })
        );
    }

    #[test]
    fn test_attach_appends_in_order() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 21).unwrap();
        let mut article = Article::new(1, "t", date);
        let first = NewComment::new("a", "one").unwrap().attach(&mut article, date).unwrap();
        let second = NewComment::new("b", "two").unwrap().attach(&mut article, date).unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(article.comments, vec![first, second]);
    }
}
