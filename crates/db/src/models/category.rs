//! Static category configuration.
//!
//! Categories are configuration, not rows: a category page exists for each
//! entry here, and category-level facts (such as indexability) are derived
//! from the tools that reference it by name.

/// Sentinel shown in navigation, never a real category.
pub const ALL_CATEGORY: &str = "All";

/// Default category set, in display order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Chatbots",
    "Image Generation",
    "Video & Audio",
    "Code & Development",
    "Writing",
    "Productivity",
    "Audio",
    "Social Media",
];
