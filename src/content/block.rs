//! Content blocks from the Notion block-children API
//!
//! A block is a tagged payload: the `type` field names the variant and the
//! type-specific data lives under a key of the same name. Every nested field
//! is optional upstream, so the payload structs default everything and the
//! renderer resolves each field once.

use serde::Deserialize;

/// One unit of article body content, in authoritative source order
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    /// Opaque block id, used as a stable render key
    #[serde(default)]
    pub id: String,

    #[serde(flatten)]
    pub body: BlockBody,
}

/// Type-dispatched block payload
///
/// The upstream vocabulary is larger than what the renderer supports;
/// everything unrecognized lands in `Other` and renders to nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BlockBody {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextBody },

    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextBody },

    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextBody },

    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextBody },

    #[serde(rename = "image")]
    Image { image: ImageBody },

    #[serde(rename = "embed")]
    Embed { embed: LinkBody },

    #[serde(rename = "bookmark")]
    Bookmark { bookmark: LinkBody },

    #[serde(rename = "link_preview")]
    LinkPreview { link_preview: LinkBody },

    #[serde(other)]
    Other,
}

/// Payload of text-bearing blocks (paragraph, headings)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextBody {
    #[serde(default)]
    pub rich_text: Vec<RichTextRun>,
}

impl RichTextBody {
    /// Concatenate the plain-text fields of all runs, in order.
    /// Zero runs degenerate to an empty string.
    pub fn plain_text(&self) -> String {
        self.rich_text
            .iter()
            .map(|run| run.plain_text.as_str())
            .collect()
    }
}

/// A fragment of styled text; only the plain text matters here
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: String,
}

/// Payload of an image block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageBody {
    /// "external" or "file"; decides which nested ref holds the URL
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub external: Option<FileRef>,

    #[serde(default)]
    pub file: Option<FileRef>,
}

impl ImageBody {
    /// Resolve the image URL per the image-type tag.
    /// Returns `None` when the tagged ref is missing or its URL is empty.
    pub fn resolved_url(&self) -> Option<String> {
        let source = if self.kind.as_deref() == Some("external") {
            self.external.as_ref()
        } else {
            self.file.as_ref()
        };
        source
            .and_then(|f| f.url.clone())
            .filter(|url| !url.is_empty())
    }
}

/// A hosted or external file reference
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub url: Option<String>,
}

/// Payload of embed, bookmark and link_preview blocks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkBody {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_from_json() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    { "plain_text": "Hello, " },
                    { "plain_text": "world" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(block.id, "b1");
        match block.body {
            BlockBody::Paragraph { paragraph } => {
                assert_eq!(paragraph.plain_text(), "Hello, world");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_becomes_other() {
        let block: Block = serde_json::from_value(json!({
            "id": "b2",
            "type": "to_do",
            "to_do": { "checked": true }
        }))
        .unwrap();

        assert!(matches!(block.body, BlockBody::Other));
    }

    #[test]
    fn test_image_url_resolution() {
        let external = ImageBody {
            kind: Some("external".to_string()),
            external: Some(FileRef {
                url: Some("https://example.com/a.png".to_string()),
            }),
            file: None,
        };
        assert_eq!(
            external.resolved_url().as_deref(),
            Some("https://example.com/a.png")
        );

        let hosted = ImageBody {
            kind: Some("file".to_string()),
            external: None,
            file: Some(FileRef {
                url: Some("https://files.example.com/b.png".to_string()),
            }),
        };
        assert_eq!(
            hosted.resolved_url().as_deref(),
            Some("https://files.example.com/b.png")
        );

        let empty = ImageBody {
            kind: Some("file".to_string()),
            external: None,
            file: Some(FileRef {
                url: Some(String::new()),
            }),
        };
        assert_eq!(empty.resolved_url(), None);

        assert_eq!(ImageBody::default().resolved_url(), None);
    }

    #[test]
    fn test_missing_rich_text_defaults_empty() {
        let block: Block = serde_json::from_value(json!({
            "id": "b3",
            "type": "heading_2",
            "heading_2": {}
        }))
        .unwrap();

        match block.body {
            BlockBody::Heading2 { heading_2 } => {
                assert_eq!(heading_2.plain_text(), "");
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
