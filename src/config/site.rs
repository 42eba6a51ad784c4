//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::i18n::Locale;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Content
    /// Seed file or directory, relative to the site directory
    pub source: String,
    /// Category filter label meaning "every category"
    pub all_category: String,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Блог".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            source: "source/articles.json".to_string(),
            all_category: "all".to_string(),

            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Display locale, falling back to English for unknown languages
    pub fn locale(&self) -> Locale {
        self.language.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using en", e);
            Locale::En
        })
    }
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.source, "source/articles.json");
        assert_eq!(config.all_category, "all");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
language: ru-RU
all_category: Все
server:
  port: 8080
theme_color: black
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.locale(), Locale::Ru);
        assert_eq!(config.all_category, "Все");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.ip, "localhost");
        assert!(config.extra.contains_key("theme_color"));
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = SiteConfig {
            language: "klingon".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.locale(), Locale::En);
    }
}
