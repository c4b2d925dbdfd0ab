//! Prometheus metrics for the search client.
//!
//! This module provides metrics for:
//! - Requests made to the site (duration, outcome)
//! - Result counts per search page

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Request duration by operation ("search", "items").
pub static REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "zooqle_request_duration_seconds",
            "Duration of requests to the search site",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
    )
    .unwrap()
});

/// Requests total by operation and outcome.
pub static REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("zooqle_requests_total", "Total requests to the search site"),
        &["operation", "outcome"], // outcome: "success", "transport_error", "parse_error"
    )
    .unwrap()
});

/// Searches answered locally without a request, by reason.
pub static SKIPPED_SEARCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "zooqle_skipped_searches_total",
            "Searches answered with the empty page without a request",
        ),
        &["reason"], // reason: "blank_query", "invalid_page"
    )
    .unwrap()
});

/// Results returned per search page.
pub static SEARCH_RESULTS: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "zooqle_search_results",
            "Number of results returned per search page",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0, 30.0]),
    )
    .unwrap()
});

/// Get all client metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(REQUEST_DURATION.clone()),
        Box::new(REQUESTS_TOTAL.clone()),
        Box::new(SKIPPED_SEARCHES.clone()),
        Box::new(SEARCH_RESULTS.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_is_unlabelled_histogram() {
        let before = SEARCH_RESULTS.get_sample_count();
        SEARCH_RESULTS.observe(2.0);
        assert!(SEARCH_RESULTS.get_sample_count() > before);
    }

    #[test]
    fn test_all_metrics_lists_every_collector() {
        assert_eq!(all_metrics().len(), 4);
    }
}
