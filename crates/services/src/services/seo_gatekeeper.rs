//! SEO gatekeeper: decides which tools and categories are eligible for
//! search engine indexing.
//!
//! Tool checks are pure functions over an already fetched row; the category
//! check counts rows through the injected [`ToolReader`] and fails closed on
//! lookup errors.

use db::models::tool::{Tool, ToolStatus};
use tracing::warn;

use super::{config::SeoConfig, tool_reader::ToolReader};

/// Whether a single tool page is high-quality enough to be indexed.
///
/// Rules, in order: must be published, must not carry the manual de-index
/// override, must have at least `min_description_len` combined description
/// characters, must have an icon.
pub fn is_tool_indexable(tool: &Tool, config: &SeoConfig) -> bool {
    if tool.status != ToolStatus::Published {
        return false;
    }
    if tool.seo_ignore {
        return false;
    }
    if tool.combined_description_len() < config.min_description_len {
        return false; // Thin content
    }
    if !tool.has_icon() {
        return false; // Low visual quality
    }
    true
}

/// The indexable subset of an already fetched tool list, input order kept.
pub fn filter_indexable_tools(tools: Vec<Tool>, config: &SeoConfig) -> Vec<Tool> {
    tools
        .into_iter()
        .filter(|tool| is_tool_indexable(tool, config))
        .collect()
}

/// Categories worth indexing, derived from the tools that reference them.
///
/// A category qualifies when at least `min_tools_for_indexing` of its tools
/// pass [`is_tool_indexable`]. Categories are returned in first-seen order;
/// that ordering is part of the contract (sitemap URL order depends on it).
pub fn compute_indexable_categories(tools: &[Tool], config: &SeoConfig) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for tool in tools {
        if !seen.contains(&tool.category.as_str()) {
            seen.push(&tool.category);
        }
    }

    seen.into_iter()
        .filter(|category| {
            tools
                .iter()
                .filter(|tool| tool.category == *category && is_tool_indexable(tool, config))
                .count()
                >= config.min_tools_for_indexing
        })
        .map(str::to_string)
        .collect()
}

/// Whether a category page should be indexed.
///
/// Counts published tools through the read capability. A failed lookup is
/// treated as "not indexable" so a flaky backend can never leak thin
/// category pages into a sitemap.
pub async fn is_category_indexable<R>(reader: &R, category_slug: &str, config: &SeoConfig) -> bool
where
    R: ToolReader + ?Sized,
{
    match reader.count_published_in_category(category_slug).await {
        Ok(count) => count >= config.min_tools_for_indexing as i64,
        Err(error) => {
            warn!(
                category = category_slug,
                error = %error,
                "category tool count failed, treating category as not indexable"
            );
            false
        }
    }
}
