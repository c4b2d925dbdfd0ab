//! Detection of structured identifiers the site indexes for exact lookup.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static HEX_INFO_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Fa-f]{40}$").unwrap());

static BASE32_INFO_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z2-7]{32}$").unwrap());

static IMDB_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^tt[0-9]{7}$").unwrap());

/// True for a 40-character hex or 32-character base-32 info hash.
pub fn is_info_hash(text: &str) -> bool {
    HEX_INFO_HASH.is_match(text) || BASE32_INFO_HASH.is_match(text)
}

/// True for an IMDb title id such as `tt0111161`.
pub fn is_imdb_id(text: &str) -> bool {
    IMDB_ID.is_match(text)
}

/// True when the text should be searched as an exact identifier.
pub fn is_exact_identifier(text: &str) -> bool {
    let text = text.trim();
    is_info_hash(text) || is_imdb_id(text)
}
