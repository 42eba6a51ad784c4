//! Content module - articles, comments and the catalog that holds them

mod archive;
mod article;
mod catalog;
mod comment;
mod filter;
pub mod loader;

pub use archive::MonthKey;
pub use article::{Article, ArticleId, ArticleSummary, Category, Comment, Tag};
pub use catalog::Catalog;
pub use comment::NewComment;
pub use filter::{CategoryFilter, TagFilter};
