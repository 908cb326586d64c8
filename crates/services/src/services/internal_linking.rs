//! Internal linking: ranks link candidates and injects hyperlinks into
//! description text.

use std::collections::HashSet;

use db::models::{category::ALL_CATEGORY, tool::Tool};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;
use uuid::Uuid;

use super::{config::SeoConfig, tool_reader::ToolReader};

/// Category links always outrank tool links.
const CATEGORY_PRIORITY: i32 = 10;
const TOOL_PRIORITY: i32 = 5;

/// How many top tools per category are considered for linking.
const TOOL_CANDIDATE_LIMIT: i64 = 10;

/// A potential link target for one rendering context. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct LinkCandidate {
    pub term: String,
    pub url: String,
    pub priority: i32,
}

/// Builds the ranked candidate pool for a rendering context: every
/// configured category (minus the "All" sentinel) at high priority, then the
/// most viewed published tools of the current category at medium priority.
///
/// A failed tool lookup degrades to category-only candidates; this is a
/// query, never a hard failure.
pub async fn build_link_candidates<R>(
    reader: &R,
    config: &SeoConfig,
    current_category: Option<&str>,
    current_tool: Option<Uuid>,
) -> Vec<LinkCandidate>
where
    R: ToolReader + ?Sized,
{
    let mut candidates: Vec<LinkCandidate> = Vec::new();

    for category in &config.categories {
        if category == ALL_CATEGORY {
            continue;
        }
        candidates.push(LinkCandidate {
            term: category.clone(),
            url: format!("/category/{}", category.to_lowercase()),
            priority: CATEGORY_PRIORITY,
        });
    }

    if let Some(category) = current_category {
        match reader
            .top_published_in_category(category, current_tool, TOOL_CANDIDATE_LIMIT)
            .await
        {
            Ok(tools) => {
                for tool in tools {
                    candidates.push(LinkCandidate {
                        term: tool.name,
                        url: format!("/tool/{}", tool.slug),
                        priority: TOOL_PRIORITY,
                    });
                }
            }
            Err(error) => {
                warn!(
                    category,
                    error = %error,
                    "tool candidate lookup failed, linking with categories only"
                );
            }
        }
    }

    // Stable sort: categories stay ahead of tools, emission order breaks ties
    candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
    candidates
}

/// Injects internal links into a plain-text block.
///
/// At most `max_links_per_text` anchors are inserted, each distinct term
/// (case-insensitive) is linked at most once, and only whole-word matches
/// count, so "cat" never links inside "category". Only the first occurrence
/// of a term is wrapped. Output is deterministic for identical inputs.
///
/// The input contract is plain text: matching is regex-based over the raw
/// string and is not HTML-aware, so feeding pre-marked-up text can produce
/// anchors inside existing tags. Later candidates also match against text
/// that already contains anchors inserted for earlier ones, so a term that
/// happens to appear in the anchor markup itself (for example "medium", a
/// whole word inside `font-medium`) can link inside those attributes.
pub fn autolink(text: &str, candidates: &[LinkCandidate], config: &SeoConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut processed = text.to_string();
    let mut link_count = 0usize;
    let mut linked_terms: HashSet<String> = HashSet::new();

    for candidate in candidates {
        if link_count >= config.max_links_per_text {
            break;
        }
        let key = candidate.term.to_lowercase();
        if linked_terms.contains(&key) {
            continue;
        }

        // Word boundaries avoid partial-word matches; the term itself is
        // escaped so its metacharacters match literally.
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&candidate.term));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };

        if let Some(found) = re.find(&processed) {
            let anchor = format!(
                r#"<a href="{}" class="text-primary hover:underline font-medium" title="Learn more about {}">{}</a>"#,
                candidate.url,
                found.as_str(),
                found.as_str()
            );
            let range = found.range();
            processed.replace_range(range, &anchor);
            link_count += 1;
            linked_terms.insert(key);
        }
    }

    processed
}

/// Related tools for a tool page: tools carrying all of the leading tags
/// first (stronger signal), then same-category fill, deduplicated. Lookup
/// failures shrink the list instead of failing the page.
pub async fn smart_alternatives<R>(reader: &R, tool: &Tool, limit: usize) -> Vec<Tool>
where
    R: ToolReader + ?Sized,
{
    let mut alternatives: Vec<Tool> = Vec::new();

    if !tool.tags.is_empty() {
        let leading_tags = &tool.tags[..tool.tags.len().min(2)];
        match reader
            .published_sharing_tags(tool.id, leading_tags, limit as i64)
            .await
        {
            Ok(matches) => alternatives = matches,
            Err(error) => {
                warn!(tool_id = %tool.id, error = %error, "tag alternatives lookup failed");
            }
        }
    }

    if alternatives.len() < limit {
        match reader
            .published_in_category(&tool.category, tool.id, (limit - alternatives.len()) as i64)
            .await
        {
            Ok(matches) => {
                let existing: HashSet<Uuid> = alternatives.iter().map(|t| t.id).collect();
                alternatives.extend(matches.into_iter().filter(|t| !existing.contains(&t.id)));
            }
            Err(error) => {
                warn!(tool_id = %tool.id, error = %error, "category alternatives lookup failed");
            }
        }
    }

    alternatives
}
