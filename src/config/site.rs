//! Site configuration (_config.yml + environment)
//!
//! Everything in `_config.yml` is optional; missing keys take the defaults
//! below. Secrets never live in the file: the Notion credential (and a
//! couple of convenience overrides) come from the environment.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::helpers::host_of;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Navigation: fixed category archives shown in the header
    pub categories: Vec<String>,

    /// Instagram handle for the outbound profile link
    pub instagram_id: String,

    /// Remote hostnames archive thumbnails may load from; anything else
    /// falls back to the placeholder image
    pub allowed_image_hosts: Vec<String>,

    // Upstream content source
    pub notion: NotionConfig,
}

/// Notion API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Bearer credential; environment only (`NOTION_API_KEY`)
    #[serde(skip)]
    pub api_key: String,

    /// Content database id (`NOTION_DATABASE_ID` overrides the file)
    pub database_id: String,

    /// Database property names, matching the source database schema
    pub properties: PropertyNames,
}

/// Names of the database properties each article field is read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyNames {
    pub title: String,
    pub category: String,
    pub date: String,
    pub summary: String,
    pub thumbnail: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "TRAVESIA".to_string(),
            language: "ko".to_string(),
            categories: vec![
                "Travel".to_string(),
                "Books".to_string(),
                "Investment".to_string(),
            ],
            instagram_id: "본인계정".to_string(),
            allowed_image_hosts: vec![
                "www.notion.so".to_string(),
                "images.unsplash.com".to_string(),
                "s3.us-west-2.amazonaws.com".to_string(),
                "prod-files-secure.s3.us-west-2.amazonaws.com".to_string(),
                "via.placeholder.com".to_string(),
            ],
            notion: NotionConfig::default(),
        }
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            properties: PropertyNames::default(),
        }
    }
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: "제목".to_string(),
            category: "카테고리".to_string(),
            date: "작성일".to_string(),
            summary: "요약".to_string(),
            thumbnail: "썸네일".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `_config.yml` from a site directory if present, then apply
    /// environment overrides
    pub fn from_dir<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");
        let mut config = if config_path.exists() {
            Self::load(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Pull `NOTION_API_KEY`, `NOTION_DATABASE_ID` and `INSTAGRAM_ID`
    /// from the environment
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("NOTION_API_KEY") {
            self.notion.api_key = key;
        }
        if let Ok(db) = std::env::var("NOTION_DATABASE_ID") {
            self.notion.database_id = db;
        }
        if let Ok(id) = std::env::var("INSTAGRAM_ID") {
            self.instagram_id = id;
        }
    }

    /// Outbound Instagram profile URL
    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_id)
    }

    /// Whether an image URL points at an allow-listed host
    pub fn image_host_allowed(&self, url: &str) -> bool {
        match host_of(url) {
            Some(host) => self.allowed_image_hosts.iter().any(|h| h == host),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "TRAVESIA");
        assert_eq!(config.categories, ["Travel", "Books", "Investment"]);
        assert_eq!(config.notion.properties.date, "작성일");
        assert_eq!(config.instagram_url(), "https://instagram.com/본인계정");
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "title: My Blog\nnotion:\n  database_id: abc123\n  properties:\n    date: Date"
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.notion.database_id, "abc123");
        assert_eq!(config.notion.properties.date, "Date");
        // Untouched keys fall back
        assert_eq!(config.notion.properties.title, "제목");
        assert_eq!(config.categories, ["Travel", "Books", "Investment"]);
    }

    #[test]
    fn test_image_host_allow_list() {
        let config = SiteConfig::default();
        assert!(config.image_host_allowed("https://images.unsplash.com/photo-1?w=400"));
        assert!(config.image_host_allowed("https://via.placeholder.com/400x200"));
        assert!(!config.image_host_allowed("https://evil.example.com/x.png"));
        assert!(!config.image_host_allowed("not a url"));
    }
}
