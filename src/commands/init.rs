//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::templates::{DEFAULT_CONFIG, SEED_ARTICLES};

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    // Create directory structure
    fs::create_dir_all(target_dir.join("source"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote {:?}", config_path);

    let seed_path = target_dir.join("source/articles.json");
    fs::write(&seed_path, SEED_ARTICLES)?;
    tracing::debug!("Wrote {:?}", seed_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::Blog;

    #[test]
    fn test_init_creates_loadable_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.all_category, "Все");
        let catalog = blog.load_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
