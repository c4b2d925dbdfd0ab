//! Types for search results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Search URL reported by the empty result page.
pub const DEFAULT_SEARCH_URL: &str = "https://zooqle.com/search";

/// Page size the site uses for search results.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 30;

/// A torrent listed in a search result page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Torrent {
    /// Torrent title.
    pub title: String,
    /// Hex SHA-1 of the torrent metadata.
    pub info_hash: String,
    /// Total content size in bytes.
    pub size_bytes: i64,
    /// Current seeder count.
    pub seeders: i32,
    /// Current leecher count.
    pub peers: i32,
    /// When the torrent was published.
    pub publish_date: DateTime<Utc>,
    /// Torrent page on the site.
    pub page_url: Url,
    /// Direct link to the .torrent file.
    pub torrent_url: Url,
    /// Magnet link.
    pub magnet_uri: Url,
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Search terms as echoed by the site.
    pub search_terms: String,
    /// URL of the result listing.
    pub search_url: String,
    /// Total matches across all pages.
    pub total_result_count: u32,
    /// Index of the first result on this page.
    pub start_index: u32,
    /// Page size.
    pub item_count_per_page: u32,
    /// Results in the order the site returned them.
    pub results: Vec<Torrent>,
}

impl SearchResult {
    /// The zero-result page returned when no request is made.
    pub fn empty() -> Self {
        Self {
            search_terms: String::new(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            total_result_count: 0,
            start_index: 0,
            item_count_per_page: DEFAULT_ITEMS_PER_PAGE,
            results: Vec::new(),
        }
    }

    /// Number of pages needed to list every match.
    pub fn total_page_count(&self) -> u32 {
        if self.item_count_per_page == 0 {
            return 0;
        }
        self.total_result_count.div_ceil(self.item_count_per_page)
    }

    /// 1-based number of this page, or 0 when there are no results.
    pub fn page_number(&self) -> u32 {
        if self.total_result_count == 0 || self.item_count_per_page == 0 {
            return 0;
        }
        self.start_index / self.item_count_per_page + 1
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Results for \"{}\" (page {} of {})",
            self.search_terms,
            self.page_number(),
            self.total_page_count()
        )
    }
}

/// Broad class of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an unusable argument.
    Argument,
    /// The request did not produce a response body.
    Transport,
    /// The response body did not have the expected shape.
    Parse,
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Search backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Search backend API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::InvalidArgument(_) => ErrorKind::Argument,
            SearchError::ConnectionFailed(_)
            | SearchError::Timeout
            | SearchError::ApiError { .. } => ErrorKind::Transport,
            SearchError::ParseError(_) => ErrorKind::Parse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u32, start: u32) -> SearchResult {
        SearchResult {
            total_result_count: total,
            start_index: start,
            ..SearchResult::empty()
        }
    }

    #[test]
    fn test_total_page_count() {
        for (total, expected) in [(0, 0), (1, 1), (30, 1), (60, 2), (90, 3), (91, 4)] {
            assert_eq!(page(total, 0).total_page_count(), expected, "total={}", total);
        }
    }

    #[test]
    fn test_page_number() {
        assert_eq!(page(0, 0).page_number(), 0);
        assert_eq!(page(100, 0).page_number(), 1);
        assert_eq!(page(100, 1).page_number(), 1);
        assert_eq!(page(100, 30).page_number(), 2);
        assert_eq!(page(100, 31).page_number(), 2);
        assert_eq!(page(100, 90).page_number(), 4);
    }

    #[test]
    fn test_zero_page_size_has_no_pages() {
        let result = SearchResult {
            item_count_per_page: 0,
            ..page(10, 0)
        };
        assert_eq!(result.total_page_count(), 0);
        assert_eq!(result.page_number(), 0);
    }

    #[test]
    fn test_empty_page() {
        let empty = SearchResult::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.item_count_per_page, 30);
        assert_eq!(empty.search_terms, "");
        assert_eq!(empty.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(empty.total_page_count(), 0);
        assert_eq!(empty.page_number(), 0);
    }

    #[test]
    fn test_display() {
        let result = SearchResult {
            search_terms: "ubuntu".to_string(),
            ..page(61, 30)
        };
        assert_eq!(result.to_string(), "Results for \"ubuntu\" (page 2 of 3)");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            SearchError::InvalidArgument("x".into()).kind(),
            ErrorKind::Argument
        );
        assert_eq!(SearchError::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            SearchError::ApiError {
                status: 503,
                message: String::new()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            SearchError::ParseError("x".into()).kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_search_result_serialization() {
        let json = serde_json::to_string(&SearchResult::empty()).unwrap();
        let parsed: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SearchResult::empty());
    }
}
