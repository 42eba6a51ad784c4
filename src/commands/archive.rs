//! Print the monthly archive

use anyhow::Result;
use std::fmt::Write;

use crate::content::Catalog;
use crate::helpers::day_month;
use crate::i18n::Locale;
use crate::Blog;

pub fn run(blog: &Blog) -> Result<()> {
    let catalog = blog.load_catalog()?;
    print!("{}", render(&catalog, blog.config.locale()));
    Ok(())
}

/// Month headings in first-encounter order, each followed by its articles
pub fn render(catalog: &Catalog, locale: Locale) -> String {
    let mut out = String::new();
    for (month, articles) in catalog.group_by_month() {
        let _ = writeln!(out, "{}", month.label(locale).to_uppercase());
        for article in articles {
            let _ = writeln!(out, "  {}  {}", day_month(&article.date, locale), article.title);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::seed_articles;

    #[test]
    fn test_render_archive() {
        let catalog = Catalog::new(seed_articles().unwrap()).unwrap();

        let en = render(&catalog, Locale::En);
        assert!(en.starts_with("OCTOBER 2024\n  10/20  Минимализм в современном дизайне\n"));
        assert_eq!(en.lines().count(), 7);

        let ru = render(&catalog, Locale::Ru);
        assert!(ru.starts_with("ОКТЯБРЬ 2024 Г.\n  20.10  "));
    }
}
