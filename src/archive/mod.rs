//! Archive presenter - search, sort and paginate article summaries
//!
//! The pipeline is a pure function of (articles, view state): filter by a
//! case-insensitive substring over title and summary, stable-sort by parsed
//! date, then slice a fixed-size page. All the ephemeral per-session state
//! lives in [`ArchiveViewState`]; nothing here touches the network.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::content::ArticleSummary;
use crate::helpers::parse_timestamp;

/// Articles shown per archive page
pub const PAGE_SIZE: usize = 6;

/// Date sort direction for the archive listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Parse the `sort` query parameter; anything but "asc" is newest-first
    pub fn from_param(value: &str) -> Self {
        match value {
            "asc" => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// Presentation side effect requested by a state transition.
/// The caller performs it after the state update, outside the pure pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollToTop,
}

/// Ephemeral per-session archive state: search term, sort order, page.
///
/// Mutating the search term, the sort order, or the active category resets
/// the page back to 1, so the fields stay private and change through the
/// transition methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveViewState {
    search_term: String,
    sort_order: SortOrder,
    current_page: usize,
}

impl Default for ArchiveViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_order: SortOrder::Descending,
            current_page: 1,
        }
    }
}

impl ArchiveViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from request parameters (one server-rendered view).
    /// A page below 1 clamps to 1.
    pub fn from_parts(search_term: &str, sort_order: SortOrder, page: usize) -> Self {
        Self {
            search_term: search_term.to_string(),
            sort_order,
            current_page: page.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Update the search term; the page resets to 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Update the sort order; the page resets to 1
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.current_page = 1;
    }

    /// The active category changed (navigation between archives);
    /// the page resets to 1
    pub fn category_changed(&mut self) {
        self.current_page = 1;
    }

    /// Explicit page change. Returns the scroll reset the caller must apply.
    pub fn set_page(&mut self, page: usize) -> ViewEffect {
        self.current_page = page.max(1);
        ViewEffect::ScrollToTop
    }
}

/// One derived page of the archive plus its pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePage {
    /// The visible slice; empty when the page index is past the end
    pub articles: Vec<ArticleSummary>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Matches after filtering, before pagination
    pub total_matches: usize,
}

/// Derive the visible page deterministically from the full listing and the
/// view state. A page index beyond `total_pages` yields an empty slice, which
/// the caller renders the same as an empty search result.
pub fn present(articles: &[ArticleSummary], state: &ArchiveViewState) -> ArchivePage {
    let needle = state.search_term().to_lowercase();

    let mut matched: Vec<&ArticleSummary> = articles
        .iter()
        .filter(|article| {
            needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article.summary.to_lowercase().contains(&needle)
        })
        .collect();

    // sort_by_key is stable, so equal (or unparseable) dates keep their
    // filter-stage relative order in both directions
    match state.sort_order() {
        SortOrder::Ascending => matched.sort_by_key(|article| parse_timestamp(&article.date)),
        SortOrder::Descending => {
            matched.sort_by_key(|article| Reverse(parse_timestamp(&article.date)))
        }
    }

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);
    // Saturate: the page number comes straight from the query string, and
    // any out-of-range page must yield an empty slice, not an overflow
    let offset = state
        .current_page()
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE);

    let articles = matched
        .into_iter()
        .skip(offset)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ArchivePage {
        articles,
        current_page: state.current_page(),
        total_pages,
        total_matches,
    }
}
