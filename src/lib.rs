//! blog-catalog: the content catalog behind a small blog
//!
//! Articles carry one category and a set of tags and own an append-only
//! list of comments. The catalog answers listing queries (category + tag
//! filter), lookups by id and a month-grouped archive, and accepts new
//! comments through a validating append. A CLI and a JSON API sit on top.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{Article, ArticleId, Catalog, CategoryFilter, Comment, MonthKey, TagFilter};
pub use error::CatalogError;

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Seed file or directory the catalog is loaded from
    pub source_path: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_path = base_dir.join(&config.source);
        Self {
            config,
            base_dir,
            source_path,
        }
    }

    /// Load the catalog from the configured source
    pub fn load_catalog(&self) -> Result<Catalog> {
        content::loader::ContentLoader::new(self).load_catalog()
    }
}
