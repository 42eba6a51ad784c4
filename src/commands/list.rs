//! List catalog content

use anyhow::Result;
use std::fmt::Write;

use crate::content::{Catalog, CategoryFilter, TagFilter};
use crate::Blog;

/// List catalog content by type
pub fn run(
    blog: &Blog,
    content_type: &str,
    category: Option<&str>,
    tags: &[String],
) -> Result<()> {
    let catalog = blog.load_catalog()?;

    let output = match content_type {
        "post" | "posts" | "article" | "articles" => {
            let category = category
                .map(|c| CategoryFilter::parse(c, &blog.config.all_category))
                .unwrap_or_default();
            let tags = TagFilter::parse(&tags.join(","));
            render_articles(&catalog, &category, &tags)
        }
        "tag" | "tags" => render_tags(&catalog),
        "category" | "categories" => render_categories(&catalog),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    };

    print!("{}", output);
    Ok(())
}

/// Filtered article listing, one line per article
pub fn render_articles(catalog: &Catalog, category: &CategoryFilter, tags: &TagFilter) -> String {
    let articles = catalog.filter(category, tags);
    let mut out = format!("Articles ({}):\n", articles.len());
    for article in articles {
        let tags: Vec<&str> = article.tags.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "  #{} {} - {} [{}] {{{}}}",
            article.id,
            article.date.format("%Y-%m-%d"),
            article.title,
            article.category,
            tags.join(", ")
        );
    }
    out
}

pub fn render_tags(catalog: &Catalog) -> String {
    let tags = catalog.tags();
    let mut out = format!("Tags ({}):\n", tags.len());
    for tag in tags {
        let _ = writeln!(out, "  {} ({})", tag.name, tag.count);
    }
    out
}

pub fn render_categories(catalog: &Catalog) -> String {
    let categories = catalog.categories();
    let mut out = format!("Categories ({}):\n", categories.len());
    for category in categories {
        let _ = writeln!(out, "  {} ({})", category.name, category.count);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::seed_articles;

    fn catalog() -> Catalog {
        Catalog::new(seed_articles().unwrap()).unwrap()
    }

    #[test]
    fn test_render_filtered_articles() {
        let out = render_articles(
            &catalog(),
            &CategoryFilter::Only("Типографика".to_string()),
            &TagFilter::new(),
        );
        assert!(out.starts_with("Articles (2):\n"));
        assert!(out.contains("#2 2024-10-18 - Типографика и читабельность [Типографика]"));
        assert!(out.contains("#5 2024-10-10 - Адаптивная типографика"));
    }

    #[test]
    fn test_render_inventories() {
        let catalog = catalog();
        let categories = render_categories(&catalog);
        assert!(categories.starts_with("Categories (3):\n  Дизайн (2)\n"));

        let tags = render_tags(&catalog);
        assert!(tags.contains("  Типографика (2)\n"));
        assert!(tags.starts_with("Tags (17):\n"));
    }
}
