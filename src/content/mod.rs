//! Content module - article models and body blocks

mod article;
mod block;

pub use article::{
    ArticleDetail, ArticleSummary, DEFAULT_CATEGORY, FALLBACK_TITLE, PLACEHOLDER_THUMBNAIL,
};
pub use block::{Block, BlockBody, FileRef, ImageBody, LinkBody, RichTextBody, RichTextRun};
