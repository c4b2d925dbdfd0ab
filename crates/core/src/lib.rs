//! Client library for the Zooqle torrent search interface.
//!
//! - [`SearchQuery`] builds the site's query language from typed filters.
//! - [`parse_rss`] maps a search feed into a [`SearchResult`] page.
//! - [`ZooqleClient`] ties the two together over a [`Transport`].

pub mod client;
pub mod config;
pub mod items;
pub mod metrics;
pub mod query;
pub mod search;
pub mod testing;

pub use client::{HttpTransport, Transport, ZooqleClient, ITEM_SEARCH_PATH, SEARCH_PATH};
pub use config::{
    load_config, load_config_from_str, validate_config, ClientConfig, Config, ConfigError,
    LoggingConfig,
};
pub use items::{parse_items, Item, ItemKind, Poster};
pub use query::identifiers::{is_exact_identifier, is_imdb_id, is_info_hash};
pub use query::{Age, AgeDirection, Categories, Language, SearchQuery, Size, SizeUnit, TimeUnit};
pub use search::{
    parse_rss, ErrorKind, SearchError, SearchResult, Torrent, DEFAULT_ITEMS_PER_PAGE,
    DEFAULT_SEARCH_URL,
};
