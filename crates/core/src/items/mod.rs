//! Movie, TV show and actor lookup.
//!
//! The lookup endpoint answers with a compact JSON array whose objects use
//! single-letter keys. [`parse_items`] maps it into [`Item`] values.

mod types;

pub use types::*;

use crate::search::SearchError;

/// Parse an item lookup response.
pub fn parse_items(json: &str) -> Result<Vec<Item>, SearchError> {
    serde_json::from_str(json)
        .map_err(|e| SearchError::ParseError(format!("Failed to parse item response: {}", e)))
}
