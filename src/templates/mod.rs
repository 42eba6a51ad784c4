//! Built-in site scaffolding
//!
//! The default configuration and seed articles are embedded directly in
//! the binary so `init` works without any external files.

use crate::content::{loader, Article};
use crate::error::Result;

/// Default `_config.yml`
pub const DEFAULT_CONFIG: &str = include_str!("seed/_config.yml");

/// Seed articles written to `source/articles.json`
pub const SEED_ARTICLES: &str = include_str!("seed/articles.json");

/// Parse the embedded seed articles
pub fn seed_articles() -> Result<Vec<Article>> {
    loader::parse_articles(SEED_ARTICLES, loader::Format::Json, "seed/articles.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::i18n::Locale;

    #[test]
    fn test_seed_articles_parse() {
        let articles = seed_articles().unwrap();
        assert_eq!(articles.len(), 6);
        assert_eq!(articles[0].title, "Минимализм в современном дизайне");
        assert_eq!(articles[0].content.len(), 6);
        assert_eq!(articles[0].comments.len(), 3);
        assert_eq!(articles[5].tags.len(), 3);
    }

    #[test]
    fn test_default_config_parses() {
        let config: SiteConfig = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.locale(), Locale::Ru);
        assert_eq!(config.all_category, "Все");
        assert_eq!(config.source, "source/articles.json");
    }
}
