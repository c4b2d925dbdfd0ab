//! Search client.
//!
//! [`ZooqleClient`] sequences one request per call: it hands a rendered query
//! to a [`Transport`] and maps the returned document. The transport owns all
//! network concerns and reports failures as transport-kind [`SearchError`]s.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::items::{parse_items, Item, Poster};
use crate::metrics;
use crate::query::identifiers::{is_exact_identifier, is_imdb_id};
use crate::query::SearchQuery;
use crate::search::{parse_rss, SearchError, SearchResult};

/// Path of the torrent search endpoint.
pub const SEARCH_PATH: &str = "search";

/// Path prefix of the item lookup endpoint.
pub const ITEM_SEARCH_PATH: &str = "qss";

/// Fetches raw response text from the site.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL every request path is resolved against.
    fn base_url(&self) -> &Url;

    /// GET `path` with the given query parameters and return the body text.
    async fn get_text(&self, path: &str, params: &[(&str, String)])
        -> Result<String, SearchError>;
}

/// Client for the site's search interface.
pub struct ZooqleClient<T> {
    transport: T,
}

impl ZooqleClient<HttpTransport> {
    /// Create a client backed by HTTP with the given configuration.
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self, SearchError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ZooqleClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one page of results for a rendered query string.
    ///
    /// A blank query or a page number below 1 yields the empty page without
    /// making a request.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResult, SearchError> {
        if query.trim().is_empty() {
            metrics::SKIPPED_SEARCHES
                .with_label_values(&["blank_query"])
                .inc();
            return Ok(SearchResult::empty());
        }
        if page < 1 {
            metrics::SKIPPED_SEARCHES
                .with_label_values(&["invalid_page"])
                .inc();
            return Ok(SearchResult::empty());
        }

        debug!(query = query, page = page, "Searching torrents");

        let params = [
            ("q", query.to_string()),
            ("pg", page.to_string()),
            ("fmt", "rss".to_string()),
        ];
        let body = self.fetch("search", SEARCH_PATH, &params).await?;

        let result = parse_rss(&body).inspect_err(|e| {
            metrics::REQUESTS_TOTAL
                .with_label_values(&["search", "parse_error"])
                .inc();
            warn!(error = %e, "Search response could not be parsed");
        })?;

        metrics::REQUESTS_TOTAL
            .with_label_values(&["search", "success"])
            .inc();
        metrics::SEARCH_RESULTS.observe(result.results.len() as f64);

        debug!(
            results = result.results.len(),
            total = result.total_result_count,
            page = result.page_number(),
            "Search complete"
        );

        Ok(result)
    }

    /// Render a built query and fetch one page of its results.
    pub async fn search_query(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<SearchResult, SearchError> {
        self.search(&query.render(), page).await
    }

    /// Search plain terms. Info hashes and IMDb ids are searched as exact
    /// matches, since the site indexes them verbatim.
    pub async fn search_terms(&self, terms: &str, page: u32) -> Result<SearchResult, SearchError> {
        let query = if is_exact_identifier(terms) {
            SearchQuery::exact(terms)
        } else {
            SearchQuery::new(terms)
        };
        self.search_query(&query, page).await
    }

    /// Look up movies, TV shows and actors by name or IMDb id.
    pub async fn search_items(&self, terms: &str) -> Result<Vec<Item>, SearchError> {
        let terms = terms.trim();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        debug!(terms = terms, "Searching items");

        let path = format!("{}/{}", ITEM_SEARCH_PATH, urlencoding::encode(terms));
        let body = self.fetch("items", &path, &[]).await?;

        let items = parse_items(&body).inspect_err(|e| {
            metrics::REQUESTS_TOTAL
                .with_label_values(&["items", "parse_error"])
                .inc();
            warn!(error = %e, "Item response could not be parsed");
        })?;

        metrics::REQUESTS_TOTAL
            .with_label_values(&["items", "success"])
            .inc();

        Ok(items)
    }

    /// Find the movie or TV show with the given IMDb id.
    ///
    /// Returns `None` when the id is malformed or nothing matches.
    pub async fn item_from_imdb_id(&self, imdb_id: &str) -> Result<Option<Item>, SearchError> {
        if !is_imdb_id(imdb_id) {
            return Ok(None);
        }
        Ok(self.search_items(imdb_id).await?.into_iter().next())
    }

    /// Poster URLs for an item, resolved against the transport's base URL.
    pub fn poster(&self, item: &Item) -> Option<Poster> {
        item.poster(self.transport.base_url())
    }

    async fn fetch(
        &self,
        operation: &str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, SearchError> {
        let timer = metrics::REQUEST_DURATION
            .with_label_values(&[operation])
            .start_timer();
        let body = self.transport.get_text(path, params).await;
        timer.observe_duration();

        body.inspect_err(|e| {
            metrics::REQUESTS_TOTAL
                .with_label_values(&[operation, "transport_error"])
                .inc();
            warn!(operation = operation, error = %e, "Request failed");
        })
    }
}
