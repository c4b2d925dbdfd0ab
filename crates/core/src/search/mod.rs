//! Search result model and response mapping.
//!
//! [`parse_rss`] maps the site's RSS feed into a [`SearchResult`] page.

mod rss;
mod types;

pub use rss::{parse_rss, OPENSEARCH_NS, TORRENT_NS};
pub use types::*;
