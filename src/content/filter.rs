//! Listing filters (category + tags)

use indexmap::IndexSet;

use super::Article;

/// Labels that always mean "no category restriction"
const ALL_LABELS: &[&str] = &["all", "Все"];

/// Category half of the listing filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// Exactly this category
    Only(String),
}

impl CategoryFilter {
    /// Parse user input.
    ///
    /// An empty value, `all`, `Все`, or the site's configured label mean `All`.
    pub fn parse(input: &str, all_label: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input == all_label || ALL_LABELS.contains(&input) {
            Self::All
        } else {
            Self::Only(input.to_string())
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => article.category == *category,
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, |v| Self::parse(v, "all"))
    }
}

/// Tag half of the listing filter: an article matches if it has any of them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFilter {
    tags: IndexSet<String>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, e.g. `"Цвет, Палитра"`
    pub fn parse(input: &str) -> Self {
        input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Select the tag if absent, deselect it if present
    pub fn toggle(&mut self, tag: &str) {
        if !self.tags.shift_remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| article.has_tag(t))
    }
}

impl<S: Into<String>> FromIterator<S> for TagFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn article(category: &str, tags: &[&str]) -> Article {
        Article::new(1, "t", NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
            .with_category(category)
            .with_tags(tags.iter().copied())
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(CategoryFilter::parse("all", "all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Все", "all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  ", "all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("Any", "Any"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Дизайн", "all"),
            CategoryFilter::Only("Дизайн".to_string())
        );
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
    }

    #[test]
    fn test_category_matches() {
        let a = article("Дизайн", &[]);
        assert!(CategoryFilter::All.matches(&a));
        assert!(CategoryFilter::Only("Дизайн".into()).matches(&a));
        assert!(!CategoryFilter::Only("Типографика".into()).matches(&a));
    }

    #[test]
    fn test_tag_parse_trims_and_skips_empty() {
        let filter = TagFilter::parse(" Цвет, Палитра ,,");
        assert_eq!(filter.iter().collect::<Vec<_>>(), vec!["Цвет", "Палитра"]);
        assert!(TagFilter::parse("").is_empty());
    }

    #[test]
    fn test_tag_toggle() {
        let mut filter = TagFilter::new();
        filter.toggle("IA");
        filter.toggle("Ритм");
        assert_eq!(filter.len(), 2);
        filter.toggle("IA");
        assert_eq!(filter.iter().collect::<Vec<_>>(), vec!["Ритм"]);
    }

    #[test]
    fn test_tag_matches_any() {
        let a = article("Дизайн", &["UI/UX", "Тренды"]);
        assert!(TagFilter::new().matches(&a));
        assert!(TagFilter::from_iter(["Ритм", "Тренды"]).matches(&a));
        assert!(!TagFilter::from_iter(["Ритм"]).matches(&a));
        assert!(!TagFilter::from_iter(["Ритм"]).matches(&article("Дизайн", &[])));
    }
}
