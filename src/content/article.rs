//! Article models mapped from Notion pages

use serde::{Deserialize, Serialize};

/// Shown when the title property is missing or empty
pub const FALLBACK_TITLE: &str = "제목 없음";

/// Category assigned to pages without a select value
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Thumbnail used on archive cards when the files property is empty
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/400x200";

/// One entry in the archive listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Notion page id, unique within a listing result
    pub id: String,

    /// Display title (falls back to [`FALLBACK_TITLE`])
    pub title: String,

    /// Select property value (falls back to [`DEFAULT_CATEGORY`])
    pub category: String,

    /// ISO-8601 date string; empty when the property is unset
    pub date: String,

    /// Plain-text excerpt; may be empty
    pub summary: String,

    /// Thumbnail URL (falls back to [`PLACEHOLDER_THUMBNAIL`])
    pub thumbnail: String,
}

/// Header data for a single article page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub title: String,
    pub category: String,
    pub date: String,
    /// Hero image URL; empty when no thumbnail is set (the hero image
    /// is simply omitted, unlike archive cards which use a placeholder)
    pub thumbnail: String,
}
