//! Notion content fetcher
//!
//! Two read endpoints (page metadata, block children) plus the database
//! query endpoint. Every call is a fresh round-trip with the bearer
//! credential and versioning header; there is no retry and no cache.
//!
//! Upstream failure is never fatal: a non-success status or transport error
//! degrades to the documented empty/absent value and gets logged, so the
//! page still renders with defaults.

mod payload;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::config::{PropertyNames, SiteConfig};
use crate::content::{ArticleDetail, ArticleSummary, Block};

pub use payload::{BlockListResponse, PageObject, PropertyValue, QueryResponse};

/// Notion REST API root
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";

/// API version header sent on every request
pub const NOTION_VERSION: &str = "2022-06-28";

/// Children fetched per article; only the first page is requested, so
/// longer articles truncate (upstream continuation is deliberately not
/// followed, only logged)
const BLOCK_PAGE_SIZE: u32 = 100;

/// Transport-level failure, internal to this module; public methods
/// translate it into the documented fallback value
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("notion returned status {0}")]
    Status(StatusCode),
}

/// Client for the upstream content API
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    token: String,
    database_id: String,
    props: PropertyNames,
}

impl NotionClient {
    /// Build a client from the site configuration.
    /// Fails fast when the credential or database id is missing.
    pub fn new(config: &SiteConfig) -> anyhow::Result<Self> {
        if config.notion.api_key.is_empty() {
            anyhow::bail!("NOTION_API_KEY is not set");
        }
        if config.notion.database_id.is_empty() {
            anyhow::bail!("notion database id is not configured (NOTION_DATABASE_ID)");
        }

        let http = Client::builder()
            .user_agent(concat!("travesia/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token: config.notion.api_key.clone(),
            database_id: config.notion.database_id.clone(),
            props: config.notion.properties.clone(),
        })
    }

    /// Query the article database, newest first, optionally filtered to one
    /// category (exact, case-sensitive select match).
    /// Upstream failure yields an empty listing.
    pub async fn query_articles(&self, category: Option<&str>) -> Vec<ArticleSummary> {
        match self.query_request(category).await {
            Ok(response) => response
                .results
                .iter()
                .map(|page| page.to_summary(&self.props))
                .collect(),
            Err(err) => {
                tracing::warn!("article query failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Fetch metadata for one article page.
    /// Upstream failure yields `None`; the caller renders the
    /// "content unavailable" view.
    pub async fn page_details(&self, page_id: &str) -> Option<ArticleDetail> {
        match self
            .get_json::<PageObject>(&format!("{NOTION_API_BASE}/pages/{page_id}"), &[])
            .await
        {
            Ok(page) => Some(page.to_detail(&self.props)),
            Err(err) => {
                tracing::warn!(page_id, "page detail fetch failed: {}", err);
                None
            }
        }
    }

    /// Fetch the ordered child blocks of an article, first page only.
    /// Upstream failure yields an empty sequence.
    pub async fn block_children(&self, page_id: &str) -> Vec<Block> {
        let url = format!("{NOTION_API_BASE}/blocks/{page_id}/children");
        let query = [("page_size", BLOCK_PAGE_SIZE.to_string())];

        match self.get_json::<BlockListResponse>(&url, &query).await {
            Ok(response) => {
                if response.has_more {
                    tracing::warn!(
                        page_id,
                        "article has more than {} blocks; the remainder is not fetched",
                        BLOCK_PAGE_SIZE
                    );
                }
                response.results
            }
            Err(err) => {
                tracing::warn!(page_id, "block listing failed: {}", err);
                Vec::new()
            }
        }
    }

    async fn query_request(&self, category: Option<&str>) -> Result<QueryResponse, NotionError> {
        let url = format!("{NOTION_API_BASE}/databases/{}/query", self.database_id);

        let mut body = json!({
            "sorts": [{ "property": self.props.date, "direction": "descending" }],
        });
        if let Some(name) = category {
            body["filter"] = json!({
                "property": self.props.category,
                "select": { "equals": name },
            });
        }

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, NotionError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        Self::into_json(response).await
    }

    async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, NotionError> {
        let status = response.status();
        if !status.is_success() {
            return Err(NotionError::Status(status));
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_status_error() {
        // The public methods turn this into the documented fallback
        // (None / empty vec); nothing gets raised past them
        let result =
            NotionClient::into_json::<QueryResponse>(response(500, "upstream down")).await;
        assert!(matches!(
            result,
            Err(NotionError::Status(status)) if status.as_u16() == 500
        ));

        let result = NotionClient::into_json::<BlockListResponse>(response(404, "{}")).await;
        assert!(matches!(
            result,
            Err(NotionError::Status(status)) if status.as_u16() == 404
        ));
    }

    #[tokio::test]
    async fn test_success_body_parses() {
        let body = r#"{ "results": [ { "id": "p1", "properties": {} } ] }"#;
        let parsed = NotionClient::into_json::<QueryResponse>(response(200, body))
            .await
            .unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].id, "p1");
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_an_http_error() {
        let result =
            NotionClient::into_json::<QueryResponse>(response(200, "not json")).await;
        assert!(matches!(result, Err(NotionError::Http(_))));
    }
}
