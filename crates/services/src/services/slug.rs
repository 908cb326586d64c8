//! Slug derivation and collision handling for tool names.

use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

/// How many numeric suffixes are tried before falling back to a timestamp.
const MAX_SUFFIX_ATTEMPTS: u32 = 100;

/// Derives a URL-safe slug from a display name.
///
/// Lowercases and trims, collapses whitespace runs to single hyphens, drops
/// everything outside `[a-z0-9_-]`, collapses hyphen runs, and trims edge
/// hyphens. Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }
    slug.trim_matches('-').to_string()
}

/// Resolves a slug that is free among `existing`.
///
/// A name that slugifies to nothing falls back to `tool-` plus the first
/// eight characters of the id. Collisions get `-1`, `-2`, ... appended;
/// after [`MAX_SUFFIX_ATTEMPTS`] the current millisecond timestamp is
/// appended instead, so the function always terminates.
pub fn resolve_unique_slug(name: &str, tool_id: &Uuid, existing: &HashSet<String>) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base = format!("tool-{}", &tool_id.to_string()[..8]);
    }

    if !existing.contains(&base) {
        return base;
    }

    for counter in 1..=MAX_SUFFIX_ATTEMPTS {
        let candidate = format!("{base}-{counter}");
        if !existing.contains(&candidate) {
            return candidate;
        }
    }

    format!("{base}-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slugs(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn basic_transform() {
        assert_eq!(slugify("Foo Bar"), "foo-bar");
        assert_eq!(slugify("  Spaced   Out  "), "spaced-out");
        assert_eq!(slugify("--Weird--Name!!--"), "weird-name");
        assert_eq!(slugify("Héllo, Wörld"), "hllo-wrld");
    }

    #[test]
    fn slugify_is_idempotent() {
        for input in ["Foo Bar", "  A  B  ", "already-a-slug", "C++ Helper", ""] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn collision_appends_next_free_counter() {
        let existing = slugs(&["foo-bar", "foo-bar-1"]);
        let id = Uuid::new_v4();
        assert_eq!(resolve_unique_slug("Foo Bar", &id, &existing), "foo-bar-2");
    }

    #[test]
    fn free_base_is_returned_untouched() {
        let id = Uuid::new_v4();
        assert_eq!(
            resolve_unique_slug("Foo Bar", &id, &HashSet::new()),
            "foo-bar"
        );
    }

    #[test]
    fn empty_transform_falls_back_to_id() {
        let id = Uuid::new_v4();
        let slug = resolve_unique_slug("!!!", &id, &HashSet::new());
        assert_eq!(slug, format!("tool-{}", &id.to_string()[..8]));
    }

    #[test]
    fn exhausted_counters_fall_back_to_timestamp() {
        let mut existing = slugs(&["foo-bar"]);
        for counter in 1..=100 {
            existing.insert(format!("foo-bar-{counter}"));
        }
        let id = Uuid::new_v4();
        let slug = resolve_unique_slug("Foo Bar", &id, &existing);

        assert!(!existing.contains(&slug));
        let suffix = slug.strip_prefix("foo-bar-").unwrap();
        // Millisecond timestamps are far past any tried counter
        assert!(suffix.parse::<i64>().unwrap() > 1_000_000_000_000);
    }
}
