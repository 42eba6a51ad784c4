//! Show a single article with its comments

use anyhow::Result;
use std::fmt::Write;

use crate::content::Article;
use crate::helpers::full_date;
use crate::i18n::Locale;
use crate::Blog;

pub fn run(blog: &Blog, id: &str) -> Result<()> {
    let catalog = blog.load_catalog()?;
    let article = catalog.get_by_id(id)?;
    print!("{}", render(article, blog.config.locale()));
    Ok(())
}

pub fn render(article: &Article, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} • {} • {}",
        full_date(&article.date, locale),
        article.read_time,
        article.author
    );
    let _ = writeln!(out, "{}", article.title);
    let tags: Vec<&str> = article.tags.iter().map(String::as_str).collect();
    let _ = writeln!(out, "[{}] {}", article.category, tags.join(", "));

    for paragraph in &article.content {
        let _ = write!(out, "\n{}\n", paragraph);
    }

    let _ = write!(out, "\nComments ({}):\n", article.comments.len());
    for comment in &article.comments {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            comment.author,
            full_date(&comment.date, locale),
            comment.text
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::seed_articles;

    #[test]
    fn test_render_article() {
        let articles = seed_articles().unwrap();
        let out = render(&articles[0], Locale::Ru);
        assert!(out.starts_with("20 октября 2024 г. • 5 мин • Анна Дизайнова\n"));
        assert!(out.contains("[Дизайн] UI/UX, Минимализм, Тренды\n"));
        assert!(out.contains("Comments (3):\n  Мария К. (21 октября 2024 г.): Отличная статья!"));
    }
}
