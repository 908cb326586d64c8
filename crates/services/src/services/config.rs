//! SEO configuration shared by the gatekeeper and the internal linker.

use db::models::category::DEFAULT_CATEGORIES;

/// Tunable thresholds for indexability and internal linking.
#[derive(Debug, Clone)]
pub struct SeoConfig {
    /// Category names eligible for linking and indexing, in display order.
    pub categories: Vec<String>,
    /// Minimum combined description length (characters) for a tool page to
    /// be worth indexing.
    pub min_description_len: usize,
    /// Minimum count of published tools for a category page to be indexed.
    pub min_tools_for_indexing: usize,
    /// Maximum hyperlinks injected into a single text block.
    pub max_links_per_text: usize,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            min_description_len: 150,
            min_tools_for_indexing: 1,
            max_links_per_text: 5,
        }
    }
}
