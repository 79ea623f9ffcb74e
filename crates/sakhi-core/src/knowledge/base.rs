//! Filterable knowledge article collection.

use super::model::{Article, Category};
use super::preset::default_articles;

/// A read-only collection of knowledge articles with category and text
/// filtering.
pub struct KnowledgeBase {
    articles: Vec<Article>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl KnowledgeBase {
    /// Creates a knowledge base over the given articles.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Creates a knowledge base over the built-in catalog.
    pub fn with_defaults() -> Self {
        Self::new(default_articles())
    }

    /// Returns all articles in catalog order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Returns articles matching both filters, in catalog order.
    ///
    /// `category: None` matches every category. The term matches
    /// case-insensitively against title, summary, or any tag; a blank
    /// term matches everything.
    pub fn search(&self, category: Option<Category>, term: &str) -> Vec<&Article> {
        let term = term.trim().to_lowercase();
        self.articles
            .iter()
            .filter(|article| category.is_none_or(|c| article.category == c))
            .filter(|article| {
                term.is_empty()
                    || article.title.to_lowercase().contains(&term)
                    || article.summary.to_lowercase().contains(&term)
                    || article.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_term_returns_everything() {
        let kb = KnowledgeBase::with_defaults();
        assert_eq!(kb.search(None, "  ").len(), kb.articles().len());
    }

    #[test]
    fn test_category_filter_narrows_results() {
        let kb = KnowledgeBase::with_defaults();
        let pests = kb.search(Some(Category::Pests), "");
        assert_eq!(pests.len(), 2);
        assert!(pests.iter().all(|a| a.category == Category::Pests));
    }

    #[test]
    fn test_term_matches_title_summary_and_tags() {
        let kb = KnowledgeBase::with_defaults();

        // title match, case-insensitive
        assert_eq!(kb.search(None, "PLANTHOPPER").len(), 1);
        // tag-only match
        assert!(!kb.search(None, "water conservation").is_empty());
        // combined with category filter
        assert_eq!(kb.search(Some(Category::Crops), "planthopper").len(), 0);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let kb = KnowledgeBase::with_defaults();
        assert!(kb.search(None, "submarine").is_empty());
    }
}
