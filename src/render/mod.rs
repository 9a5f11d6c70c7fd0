//! Block renderer - turns a fetched block sequence into article HTML
//!
//! The transformation is a single order-preserving pass: every block either
//! maps to one rendered node or is skipped. There are no error paths; missing
//! or malformed payloads degrade to "emit nothing" so one bad block can never
//! abort the rest of the article.

use crate::content::{Block, BlockBody, LinkBody, RichTextBody};
use crate::helpers::html_escape;

/// One rendered element of the article body, keyed by its source block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    /// Source block id, stable across re-renders of the same input
    pub id: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A paragraph whose concatenated text came out empty
    BlankLine,
    Paragraph { text: String },
    /// Headings emit even when their text is empty
    Heading { level: u8, text: String },
    Image { url: String },
    /// Google Maps URL rendered as a lazy-loaded 16:9 frame
    MapFrame { url: String },
    /// Any other embed/bookmark/link_preview URL, shown as an outbound link
    Link { url: String },
}

/// Render a block sequence lazily, preserving input order.
/// Output length is at most the input length; unsupported and malformed
/// blocks are dropped without a trace.
pub fn render_blocks(blocks: &[Block]) -> impl Iterator<Item = RenderedNode> + '_ {
    blocks.iter().filter_map(render_block)
}

/// Render the whole sequence to an HTML fragment
pub fn render_to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    for node in render_blocks(blocks) {
        html.push_str(&node.to_html());
        html.push('\n');
    }
    html
}

fn render_block(block: &Block) -> Option<RenderedNode> {
    let kind = match &block.body {
        BlockBody::Paragraph { paragraph } => paragraph_node(paragraph),
        BlockBody::Heading1 { heading_1 } => heading_node(1, heading_1),
        BlockBody::Heading2 { heading_2 } => heading_node(2, heading_2),
        BlockBody::Heading3 { heading_3 } => heading_node(3, heading_3),
        BlockBody::Image { image } => NodeKind::Image {
            url: image.resolved_url()?,
        },
        BlockBody::Embed { embed } => link_node(embed)?,
        BlockBody::Bookmark { bookmark } => link_node(bookmark)?,
        BlockBody::LinkPreview { link_preview } => link_node(link_preview)?,
        BlockBody::Other => return None,
    };

    Some(RenderedNode {
        id: block.id.clone(),
        kind,
    })
}

fn paragraph_node(body: &RichTextBody) -> NodeKind {
    let text = body.plain_text();
    if text.is_empty() {
        NodeKind::BlankLine
    } else {
        NodeKind::Paragraph { text }
    }
}

fn heading_node(level: u8, body: &RichTextBody) -> NodeKind {
    NodeKind::Heading {
        level,
        text: body.plain_text(),
    }
}

fn link_node(body: &LinkBody) -> Option<NodeKind> {
    let url = body.url.as_deref().filter(|url| !url.is_empty())?;
    if is_map_url(url) {
        Some(NodeKind::MapFrame {
            url: url.to_string(),
        })
    } else {
        Some(NodeKind::Link {
            url: url.to_string(),
        })
    }
}

/// Literal substring check: a URL containing both "google" and "map"
/// (case-sensitive, in any order) is treated as an embeddable map.
pub fn is_map_url(url: &str) -> bool {
    url.contains("google") && url.contains("map")
}

impl RenderedNode {
    /// Emit the HTML for this node; text and URLs are escaped here
    pub fn to_html(&self) -> String {
        match &self.kind {
            NodeKind::BlankLine => "<br>".to_string(),
            NodeKind::Paragraph { text } => {
                format!("<p>{}</p>", html_escape(text))
            }
            NodeKind::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", html_escape(text))
            }
            NodeKind::Image { url } => {
                format!(
                    r#"<img src="{}" alt="content image" class="article-image">"#,
                    html_escape(url)
                )
            }
            NodeKind::MapFrame { url } => {
                format!(
                    concat!(
                        r#"<div class="map-frame">"#,
                        r#"<iframe src="{}" allowfullscreen loading="lazy" "#,
                        r#"referrerpolicy="no-referrer-when-downgrade"></iframe>"#,
                        "</div>"
                    ),
                    html_escape(url)
                )
            }
            NodeKind::Link { url } => {
                format!(
                    r#"<a class="block-link" href="{}" target="_blank" rel="noopener noreferrer">🔗 {}</a>"#,
                    html_escape(url),
                    html_escape(url)
                )
            }
        }
    }
}
