//! travesia: a Notion-backed blog server
//!
//! Content lives in a Notion database. Each page view fetches fresh data,
//! renders the block sequence to HTML and serves it through a small set of
//! routes: the archive, per-category archives and article pages.

pub mod archive;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod notion;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main application: configuration plus the upstream content client
#[derive(Debug, Clone)]
pub struct Travesia {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Upstream content API client
    pub notion: notion::NotionClient,
}

impl Travesia {
    /// Create an instance from a site directory: reads `_config.yml` when
    /// present, applies environment overrides and builds the Notion client
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = config::SiteConfig::from_dir(base_dir)?;
        let notion = notion::NotionClient::new(&config)?;
        Ok(Self { config, notion })
    }
}
