//! Raw Notion API payloads and their defensive mapping to article models
//!
//! The upstream schema is externally owned and deeply optional, so every
//! nested field is an `Option` here and each article field is resolved to
//! its default in exactly one place. An empty string counts as missing,
//! matching the falsy-or fallbacks of the original frontend.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::PropertyNames;
use crate::content::{
    ArticleDetail, ArticleSummary, Block, RichTextRun, DEFAULT_CATEGORY, FALLBACK_TITLE,
    PLACEHOLDER_THUMBNAIL,
};

/// Response of the database query endpoint
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<PageObject>,
}

/// Response of the block-children listing endpoint
#[derive(Debug, Deserialize)]
pub struct BlockListResponse {
    #[serde(default)]
    pub results: Vec<Block>,

    /// True when the article has more children than one page returns
    #[serde(default)]
    pub has_more: bool,
}

/// A page record: id plus a property map keyed by property name
#[derive(Debug, Deserialize)]
pub struct PageObject {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A property value; only the shapes this blog reads are modeled,
/// each optional since the actual shape depends on the property type
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PropertyValue {
    pub title: Option<Vec<RichTextRun>>,
    pub rich_text: Option<Vec<RichTextRun>>,
    pub select: Option<SelectValue>,
    pub date: Option<DateValue>,
    pub files: Option<Vec<FileAttachment>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SelectValue {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DateValue {
    pub start: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileAttachment {
    pub file: Option<FileUrl>,
    pub external: Option<FileUrl>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileUrl {
    pub url: Option<String>,
}

impl PageObject {
    /// Map this page to an archive entry, resolving every field default
    pub fn to_summary(&self, props: &PropertyNames) -> ArticleSummary {
        ArticleSummary {
            id: self.id.clone(),
            title: self
                .title_text(&props.title)
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            category: self
                .select_name(&props.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            date: self.date_start(&props.date).unwrap_or_default(),
            summary: self.rich_text(&props.summary).unwrap_or_default(),
            thumbnail: self
                .file_url(&props.thumbnail)
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
        }
    }

    /// Map this page to detail-page header data.
    /// Same fields as the summary except the thumbnail defaults to empty,
    /// which omits the hero image instead of showing a placeholder.
    pub fn to_detail(&self, props: &PropertyNames) -> ArticleDetail {
        ArticleDetail {
            title: self
                .title_text(&props.title)
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            category: self
                .select_name(&props.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            date: self.date_start(&props.date).unwrap_or_default(),
            thumbnail: self.file_url(&props.thumbnail).unwrap_or_default(),
        }
    }

    fn prop(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// First title run's plain text, if non-empty
    fn title_text(&self, name: &str) -> Option<String> {
        self.prop(name)?
            .title
            .as_ref()?
            .first()
            .map(|run| run.plain_text.clone())
            .filter(|text| !text.is_empty())
    }

    /// First rich-text run's plain text, if non-empty
    fn rich_text(&self, name: &str) -> Option<String> {
        self.prop(name)?
            .rich_text
            .as_ref()?
            .first()
            .map(|run| run.plain_text.clone())
            .filter(|text| !text.is_empty())
    }

    fn select_name(&self, name: &str) -> Option<String> {
        self.prop(name)?
            .select
            .as_ref()?
            .name
            .clone()
            .filter(|value| !value.is_empty())
    }

    fn date_start(&self, name: &str) -> Option<String> {
        self.prop(name)?
            .date
            .as_ref()?
            .start
            .clone()
            .filter(|value| !value.is_empty())
    }

    /// First attachment's hosted URL, else its external URL
    fn file_url(&self, name: &str) -> Option<String> {
        let first = self.prop(name)?.files.as_ref()?.first()?;
        let hosted = first
            .file
            .as_ref()
            .and_then(|f| f.url.clone())
            .filter(|url| !url.is_empty());
        hosted.or_else(|| {
            first
                .external
                .as_ref()
                .and_then(|f| f.url.clone())
                .filter(|url| !url.is_empty())
        })
    }
}
