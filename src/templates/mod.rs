//! Built-in theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary. The view-model structs
//! below are what the route handlers hand to the templates; they carry only
//! display-ready strings.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

use crate::archive::SortOrder;
use crate::config::SiteConfig;
use crate::content::{ArticleSummary, PLACEHOLDER_THUMBNAIL};
use crate::helpers::{article_path, category_path};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("article.html", include_str!("theme/article.html")),
            ("unavailable.html", include_str!("theme/unavailable.html")),
            (
                "partials/pager.html",
                include_str!("theme/partials/pager.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site-wide header data
#[derive(Debug, Serialize)]
pub struct SiteData {
    pub title: String,
    pub language: String,
    pub nav: Vec<NavItem>,
    pub instagram_url: String,
}

/// One category link in the header nav
#[derive(Debug, Serialize)]
pub struct NavItem {
    pub name: String,
    pub url: String,
    pub active: bool,
}

impl SiteData {
    pub fn from_config(config: &SiteConfig, active_category: Option<&str>) -> Self {
        let nav = config
            .categories
            .iter()
            .map(|name| NavItem {
                name: name.clone(),
                url: category_path(name),
                active: active_category == Some(name.as_str()),
            })
            .collect();

        Self {
            title: config.title.clone(),
            language: config.language.clone(),
            nav,
            instagram_url: config.instagram_url(),
        }
    }
}

/// One archive card
#[derive(Debug, Serialize)]
pub struct CardData {
    pub id: String,
    pub url: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub summary: String,
    pub thumbnail: String,
}

impl CardData {
    /// Build a card, swapping in the placeholder when the thumbnail host
    /// is not on the image allow-list
    pub fn from_summary(summary: &ArticleSummary, config: &SiteConfig) -> Self {
        let thumbnail = if config.image_host_allowed(&summary.thumbnail) {
            summary.thumbnail.clone()
        } else {
            PLACEHOLDER_THUMBNAIL.to_string()
        };

        Self {
            id: summary.id.clone(),
            url: article_path(&summary.id),
            title: summary.title.clone(),
            category: summary.category.clone(),
            date: summary.date.clone(),
            summary: summary.summary.clone(),
            thumbnail,
        }
    }
}

/// Echo of the archive controls, round-tripped through the query string
#[derive(Debug, Serialize)]
pub struct StateData {
    pub q: String,
    pub sort: &'static str,
}

impl StateData {
    pub fn new(search_term: &str, sort_order: SortOrder) -> Self {
        Self {
            q: search_term.to_string(),
            sort: sort_order.as_param(),
        }
    }
}

/// Pagination metadata for the pager partial
#[derive(Debug, Serialize)]
pub struct PagerData {
    pub current: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_index_renders_with_empty_archive() {
        let renderer = TemplateRenderer::new().unwrap();
        let config = SiteConfig::default();

        let mut context = Context::new();
        context.insert("site", &SiteData::from_config(&config, None));
        context.insert("category", &Option::<&str>::None);
        context.insert("articles", &Vec::<CardData>::new());
        context.insert("state", &StateData::new("", SortOrder::Descending));
        context.insert(
            "pager",
            &PagerData {
                current: 1,
                total: 0,
            },
        );

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains("TRAVESIA"));
        assert!(html.contains("No results"));
    }

    #[test]
    fn test_card_thumbnail_allow_list() {
        let config = SiteConfig::default();
        let mut summary = ArticleSummary {
            id: "a1".to_string(),
            title: "T".to_string(),
            category: "Travel".to_string(),
            date: "2024-01-01".to_string(),
            summary: String::new(),
            thumbnail: "https://images.unsplash.com/photo-1".to_string(),
        };

        let allowed = CardData::from_summary(&summary, &config);
        assert_eq!(allowed.thumbnail, "https://images.unsplash.com/photo-1");
        assert_eq!(allowed.url, "/article/a1");

        summary.thumbnail = "https://somewhere.else/x.png".to_string();
        let blocked = CardData::from_summary(&summary, &config);
        assert_eq!(blocked.thumbnail, PLACEHOLDER_THUMBNAIL);
    }
}
