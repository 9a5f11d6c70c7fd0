//! Blog server - archive, category and article routes
//!
//! Each request is independent: the handlers fetch fresh content from
//! Notion, run it through the presenter or the block renderer, and render
//! a template. There is no cross-request state beyond the shared client.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::trace::TraceLayer;

use crate::archive::{present, ArchiveViewState, SortOrder};
use crate::content::ArticleSummary;
use crate::render::render_to_html;
use crate::templates::{CardData, PagerData, SiteData, StateData, TemplateRenderer};
use crate::Travesia;

/// Shared handler state
pub struct AppState {
    app: Travesia,
    templates: TemplateRenderer,
}

/// Start the blog server
pub async fn start(app: Travesia, ip: &str, port: u16) -> Result<()> {
    let templates = TemplateRenderer::new()?;
    let state = Arc::new(AppState { app, templates });

    let router = Router::new()
        .route("/", get(index_page))
        .route("/category/:slug", get(category_page))
        .route("/article/:id", get(article_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Archive controls round-tripped through the query string.
/// Everything deserializes as a string so a malformed value degrades to
/// the default view instead of failing extraction with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ArchiveQuery {
    q: Option<String>,
    sort: Option<String>,
    page: Option<String>,
}

impl ArchiveQuery {
    fn view_state(&self) -> ArchiveViewState {
        let sort = self
            .sort
            .as_deref()
            .map(SortOrder::from_param)
            .unwrap_or_default();
        let page = self
            .page
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(1);
        ArchiveViewState::from_parts(self.q.as_deref().unwrap_or(""), sort, page)
    }
}

async fn index_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArchiveQuery>,
) -> Response {
    let articles = state.app.notion.query_articles(None).await;
    render_archive(&state, None, &articles, &query)
}

async fn category_page(
    State(state): State<Arc<AppState>>,
    // The path segment arrives percent-decoded; the category match against
    // Notion is exact and case-sensitive
    Path(slug): Path<String>,
    Query(query): Query<ArchiveQuery>,
) -> Response {
    let articles = state.app.notion.query_articles(Some(&slug)).await;
    render_archive(&state, Some(&slug), &articles, &query)
}

async fn article_page(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    // Detail and blocks are independent fetches; join them before rendering
    let (details, blocks) = tokio::join!(
        state.app.notion.page_details(&id),
        state.app.notion.block_children(&id),
    );

    let mut context = Context::new();
    context.insert("site", &SiteData::from_config(&state.app.config, None));

    let Some(details) = details else {
        return render_or_500(&state, "unavailable.html", &context);
    };

    context.insert("article", &details);
    context.insert("content", &render_to_html(&blocks));

    render_or_500(&state, "article.html", &context)
}

fn render_archive(
    state: &AppState,
    category: Option<&str>,
    articles: &[ArticleSummary],
    query: &ArchiveQuery,
) -> Response {
    let view_state = query.view_state();
    let page = present(articles, &view_state);

    let cards: Vec<CardData> = page
        .articles
        .iter()
        .map(|summary| CardData::from_summary(summary, &state.app.config))
        .collect();

    let mut context = Context::new();
    context.insert("site", &SiteData::from_config(&state.app.config, category));
    context.insert("category", &category);
    context.insert("articles", &cards);
    context.insert(
        "state",
        &StateData::new(view_state.search_term(), view_state.sort_order()),
    );
    context.insert(
        "pager",
        &PagerData {
            current: page.current_page,
            total: page.total_pages,
        },
    );

    render_or_500(state, "index.html", &context)
}

fn render_or_500(state: &AppState, template: &str, context: &Context) -> Response {
    match state.templates.render(template, context) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("template {} failed to render: {}", template, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "render error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_page_param_falls_back_to_page_one() {
        let query = ArchiveQuery {
            q: None,
            sort: None,
            page: Some("abc".to_string()),
        };
        assert_eq!(query.view_state().current_page(), 1);

        let negative = ArchiveQuery {
            q: None,
            sort: None,
            page: Some("-3".to_string()),
        };
        assert_eq!(negative.view_state().current_page(), 1);
    }

    #[test]
    fn test_query_params_map_to_view_state() {
        let query = ArchiveQuery {
            q: Some("jirisan".to_string()),
            sort: Some("asc".to_string()),
            page: Some("2".to_string()),
        };
        let state = query.view_state();
        assert_eq!(state.search_term(), "jirisan");
        assert_eq!(state.sort_order(), SortOrder::Ascending);
        assert_eq!(state.current_page(), 2);
    }
}
