//! Search query builder.
//!
//! Filters are validated when they are set. An invalid value never produces
//! an error: it clears the affected filter and leaves the rest untouched, so
//! a chain of setters always runs to completion.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::fmt;

use super::age::{Age, TimeUnit};
use super::categories::Categories;
use super::language::{code_from_ordinal, Language};
use super::size::{Size, SizeUnit};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Builder for the site's single-line query language.
///
/// # Example
///
/// ```
/// use zooqle_core::{Categories, SearchQuery, SizeUnit};
///
/// let rendered = SearchQuery::new("ubuntu")
///     .excluding_terms("beta")
///     .larger_than(1, SizeUnit::Gb)
///     .in_categories(Categories::APPS)
///     .render();
///
/// assert_eq!(rendered, "ubuntu -beta >1GB category:Apps");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    search_terms: String,
    excluded_terms: String,
    exact_match_terms: String,
    min_size: Option<Size>,
    max_size: Option<Size>,
    age: Option<Age>,
    categories: Categories,
    language: Language,
    only_in_files: bool,
}

impl SearchQuery {
    /// Create a query with the given free-text search terms.
    pub fn new(terms: &str) -> Self {
        let mut query = Self::default();
        query.with_search_terms(terms);
        query
    }

    /// Create a query whose terms must be matched exactly.
    pub fn exact(terms: &str) -> Self {
        let mut query = Self::default();
        query.matching_exactly(terms);
        query
    }

    /// A query can be rendered once it has search terms or an exact phrase.
    pub fn is_ready(&self) -> bool {
        !self.search_terms.is_empty() || !self.exact_match_terms.is_empty()
    }

    /// Replace the free-text search terms.
    pub fn with_search_terms(&mut self, terms: &str) -> &mut Self {
        self.search_terms = normalize_whitespace(terms);
        self
    }

    /// Replace the excluded terms (space-delimited).
    pub fn excluding_terms(&mut self, terms: &str) -> &mut Self {
        self.excluded_terms = normalize_whitespace(terms);
        self
    }

    /// Replace the exact-match phrase. Double quotes delimit the phrase in the
    /// query language, so any inside the text become spaces.
    pub fn matching_exactly(&mut self, terms: &str) -> &mut Self {
        self.exact_match_terms = normalize_whitespace(&terms.replace('"', " "));
        self
    }

    /// Set the lower size bound. The bound is cleared when it is invalid or
    /// not strictly below the current upper bound.
    pub fn larger_than<U>(&mut self, amount: i32, unit: U) -> &mut Self
    where
        U: TryInto<SizeUnit>,
    {
        let max_size = self.max_size;
        self.min_size = unit
            .try_into()
            .ok()
            .map(|unit| Size::new(amount, unit))
            .filter(Size::is_valid)
            .filter(|min| max_size.map_or(true, |max| min.kilobytes() < max.kilobytes()));
        self
    }

    /// Set the upper size bound. The bound is cleared when it is invalid or
    /// not strictly above the current lower bound.
    pub fn smaller_than<U>(&mut self, amount: i32, unit: U) -> &mut Self
    where
        U: TryInto<SizeUnit>,
    {
        let min_size = self.min_size;
        self.max_size = unit
            .try_into()
            .ok()
            .map(|unit| Size::new(amount, unit))
            .filter(Size::is_valid)
            .filter(|max| min_size.map_or(true, |min| min.kilobytes() < max.kilobytes()));
        self
    }

    /// Only match torrents published before the given age.
    pub fn older_than<U>(&mut self, amount: i32, unit: U) -> &mut Self
    where
        U: TryInto<TimeUnit>,
    {
        self.age = unit
            .try_into()
            .ok()
            .map(|unit| Age::older_than(amount, unit))
            .filter(Age::is_valid);
        self
    }

    /// Only match torrents published after the given age.
    pub fn newer_than<U>(&mut self, amount: i32, unit: U) -> &mut Self
    where
        U: TryInto<TimeUnit>,
    {
        self.age = unit
            .try_into()
            .ok()
            .map(|unit| Age::newer_than(amount, unit))
            .filter(Age::is_valid);
        self
    }

    /// Replace the category filter. Unknown bits reset it to any category.
    pub fn in_categories(&mut self, categories: Categories) -> &mut Self {
        self.categories = if categories.is_valid() {
            categories
        } else {
            Categories::ANY
        };
        self
    }

    /// Replace the language filter.
    pub fn in_language(&mut self, language: Language) -> &mut Self {
        self.language = language;
        self
    }

    /// Replace the language filter from a raw ordinal. Ordinals that do not
    /// name a defined language reset the filter.
    pub fn in_language_ordinal(&mut self, ordinal: u16) -> &mut Self {
        self.language = Language::from_ordinal(ordinal).unwrap_or_default();
        self
    }

    /// Restrict matching to file names.
    pub fn only_in_files(&mut self, only_in_files: bool) -> &mut Self {
        self.only_in_files = only_in_files;
        self
    }

    pub fn search_terms(&self) -> &str {
        &self.search_terms
    }

    pub fn excluded_terms(&self) -> &str {
        &self.excluded_terms
    }

    pub fn exact_match_terms(&self) -> &str {
        &self.exact_match_terms
    }

    pub fn min_size(&self) -> Option<Size> {
        self.min_size
    }

    pub fn max_size(&self) -> Option<Size> {
        self.max_size
    }

    pub fn age(&self) -> Option<Age> {
        self.age
    }

    pub fn categories(&self) -> Categories {
        self.categories
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_only_in_files(&self) -> bool {
        self.only_in_files
    }

    /// Render the query string, or an empty string if the query is not ready.
    pub fn render(&self) -> String {
        if !self.is_ready() {
            return String::new();
        }

        let mut filters: Vec<String> = Vec::new();

        if !self.search_terms.is_empty() {
            filters.push(self.search_terms.clone());
        }

        if !self.excluded_terms.is_empty() {
            filters.extend(self.excluded_terms.split(' ').map(|term| format!("-{}", term)));
        }

        if !self.exact_match_terms.is_empty() {
            filters.push(format!("\"{}\"", self.exact_match_terms.trim()));
        }

        match (self.min_size, self.max_size) {
            (Some(min), Some(max)) => filters.push(format!("{}-{}", min, max)),
            (Some(min), None) => filters.push(format!(">{}", min)),
            (None, Some(max)) => filters.push(format!("<{}", max)),
            (None, None) => {}
        }

        if let Some(age) = self.age {
            filters.push(age.to_string());
        }

        if !self.categories.is_any() {
            filters.push(format!("category:{}", self.categories));
        }

        if let Some(code) = code_from_ordinal(self.language.ordinal()) {
            filters.push(format!("+lang:{}", code));
        }

        if self.only_in_files {
            filters.push("!onlyFiles".to_string());
        }

        filters.join(" ")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Collapse runs of two or more whitespace characters into one space and trim.
fn normalize_whitespace(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
