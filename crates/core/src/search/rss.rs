//! Mapping of the RSS search feed into [`SearchResult`].
//!
//! The feed is a plain RSS 2.0 channel. Pagination metadata lives in the
//! OpenSearch namespace and the per-torrent fields in the site's own
//! namespace. Parsing is all-or-nothing: any missing field or bad value
//! fails the whole page.

use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};
use std::str::FromStr;
use url::Url;

use super::{SearchError, SearchResult, Torrent};

/// OpenSearch namespace carrying pagination metadata.
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";

/// Namespace of the per-item torrent fields.
pub const TORRENT_NS: &str = "https://zooqle.com/xmlns/0.1/index.xmlns";

/// Parse a search feed into a result page.
pub fn parse_rss(xml: &str) -> Result<SearchResult, SearchError> {
    let doc = Document::parse(xml)
        .map_err(|e| SearchError::ParseError(format!("Malformed XML: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "rss" {
        return Err(SearchError::ParseError(format!(
            "Expected <rss> root, found <{}>",
            root.tag_name().name()
        )));
    }

    let channel = child(root, None, "channel")?;

    let query = child(channel, Some(OPENSEARCH_NS), "Query")?;
    let search_terms = html_escape::decode_html_entities(attribute(query, "searchTerms")?)
        .trim()
        .to_string();

    let results = channel
        .children()
        .filter(|node| is_element(*node, None, "item"))
        .map(parse_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchResult {
        search_terms,
        search_url: child_text(channel, None, "link")?.to_string(),
        total_result_count: parse_value(channel, Some(OPENSEARCH_NS), "totalResults")?,
        start_index: parse_value(channel, Some(OPENSEARCH_NS), "startIndex")?,
        item_count_per_page: parse_value(channel, Some(OPENSEARCH_NS), "itemsPerPage")?,
        results,
    })
}

fn parse_item(item: Node<'_, '_>) -> Result<Torrent, SearchError> {
    let enclosure = child(item, None, "enclosure")?;

    Ok(Torrent {
        title: child_text(item, None, "title")?.to_string(),
        info_hash: child_text(item, Some(TORRENT_NS), "infoHash")?.to_string(),
        size_bytes: parse_value(item, Some(TORRENT_NS), "contentLength")?,
        seeders: parse_value(item, Some(TORRENT_NS), "seeds")?,
        peers: parse_value(item, Some(TORRENT_NS), "peers")?,
        publish_date: parse_date(child_text(item, None, "pubDate")?)?,
        page_url: parse_url(child_text(item, None, "link")?)?,
        torrent_url: parse_url(attribute(enclosure, "url")?)?,
        magnet_uri: parse_url(child_text(item, Some(TORRENT_NS), "magnetURI")?)?,
    })
}

fn is_element(node: Node<'_, '_>, namespace: Option<&str>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == namespace
}

fn child<'a, 'input>(
    parent: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Result<Node<'a, 'input>, SearchError> {
    parent
        .children()
        .find(|node| is_element(*node, namespace, name))
        .ok_or_else(|| SearchError::ParseError(format!("Missing <{}>", qualified(namespace, name))))
}

/// Trimmed text of a required child. An empty element yields an empty string;
/// values that go on to be parsed reject it there.
fn child_text<'a>(
    parent: Node<'a, '_>,
    namespace: Option<&str>,
    name: &str,
) -> Result<&'a str, SearchError> {
    Ok(child(parent, namespace, name)?.text().unwrap_or("").trim())
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str, SearchError> {
    node.attribute(name).ok_or_else(|| {
        SearchError::ParseError(format!(
            "Missing attribute {} on <{}>",
            name,
            node.tag_name().name()
        ))
    })
}

fn parse_value<T: FromStr>(
    parent: Node<'_, '_>,
    namespace: Option<&str>,
    name: &str,
) -> Result<T, SearchError> {
    let text = child_text(parent, namespace, name)?;
    text.parse().map_err(|_| {
        SearchError::ParseError(format!(
            "Invalid number in <{}>: {}",
            qualified(namespace, name),
            text
        ))
    })
}

fn parse_date(text: &str) -> Result<DateTime<Utc>, SearchError> {
    DateTime::parse_from_rfc2822(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SearchError::ParseError(format!("Invalid date {:?}: {}", text, e)))
}

fn parse_url(text: &str) -> Result<Url, SearchError> {
    Url::parse(text).map_err(|e| SearchError::ParseError(format!("Invalid URL {:?}: {}", text, e)))
}

fn qualified(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(OPENSEARCH_NS) => format!("opensearch:{}", name),
        Some(TORRENT_NS) => format!("torrent:{}", name),
        Some(other) => format!("{{{}}}{}", other, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_sample_feed() {
        let result = parse_rss(fixtures::SEARCH_RSS).unwrap();

        assert_eq!(result.search_terms, "ubuntu \"desktop\"");
        assert_eq!(result.search_url, "https://zooqle.com/search?q=ubuntu");
        assert_eq!(result.total_result_count, 61);
        assert_eq!(result.start_index, 30);
        assert_eq!(result.item_count_per_page, 30);
        assert_eq!(result.page_number(), 2);
        assert_eq!(result.total_page_count(), 3);
        assert_eq!(result.results.len(), 2);

        let first = &result.results[0];
        assert_eq!(first.title, "Ubuntu 18.04.1 Desktop amd64");
        assert_eq!(first.info_hash, "c9e15763f722f23e98a29decdfae341b98d53056");
        assert_eq!(first.size_bytes, 1_953_349_632);
        assert_eq!(first.seeders, 1520);
        assert_eq!(first.peers, 31);
        assert_eq!(
            first.page_url.as_str(),
            "https://zooqle.com/ubuntu-18-04-1-desktop-amd64-abc12.html"
        );
        assert_eq!(
            first.torrent_url.as_str(),
            "https://zooqle.com/download/abc12.torrent"
        );
        assert_eq!(first.magnet_uri.scheme(), "magnet");

        let second = &result.results[1];
        assert_eq!(second.title, "Ubuntu 16.04.5 Desktop i386");
    }

    #[test]
    fn test_publish_date_is_normalized_to_utc() {
        let result = parse_rss(fixtures::SEARCH_RSS).unwrap();
        let date = result.results[1].publish_date;

        // "Tue, 07 Aug 2018 23:30:00 -0200" is the next day in UTC.
        assert_eq!(date.year(), 2018);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 8);
        assert_eq!(date.hour(), 1);
        assert_eq!(date.minute(), 30);
    }

    #[test]
    fn test_empty_channel() {
        let result = parse_rss(fixtures::EMPTY_RSS).unwrap();
        assert_eq!(result.total_result_count, 0);
        assert!(result.results.is_empty());
        assert_eq!(result.page_number(), 0);
    }

    #[test]
    fn test_missing_namespaced_field_fails_whole_page() {
        let xml = fixtures::SEARCH_RSS.replacen(
            "<torrent:seeds>1520</torrent:seeds>",
            "",
            1,
        );
        let err = parse_rss(&xml).unwrap_err();
        assert!(matches!(err, SearchError::ParseError(ref msg) if msg.contains("torrent:seeds")));
    }

    #[test]
    fn test_empty_text_fields_are_kept() {
        let xml = fixtures::SEARCH_RSS
            .replacen("<title>Ubuntu 18.04.1 Desktop amd64</title>", "<title/>", 1)
            .replacen(
                "<torrent:infoHash>c9e15763f722f23e98a29decdfae341b98d53056</torrent:infoHash>",
                "<torrent:infoHash></torrent:infoHash>",
                1,
            )
            .replacen(
                "<link>https://zooqle.com/search?q=ubuntu</link>",
                "<link></link>",
                1,
            );

        let result = parse_rss(&xml).unwrap();
        assert_eq!(result.search_url, "");
        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results[0].title, "");
        assert_eq!(result.results[0].info_hash, "");
        assert_eq!(result.results[1].title, "Ubuntu 16.04.5 Desktop i386");
    }

    #[test]
    fn test_empty_number_fails() {
        let xml = fixtures::SEARCH_RSS.replace(
            "<torrent:peers>31</torrent:peers>",
            "<torrent:peers></torrent:peers>",
        );
        let err = parse_rss(&xml).unwrap_err();
        assert!(err.to_string().contains("torrent:peers"));
    }

    #[test]
    fn test_field_in_wrong_namespace_is_missing() {
        let xml = fixtures::SEARCH_RSS.replace(
            "<opensearch:totalResults>61</opensearch:totalResults>",
            "<totalResults>61</totalResults>",
        );
        assert!(matches!(parse_rss(&xml), Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_bad_number_fails() {
        let xml = fixtures::SEARCH_RSS.replace(
            "<torrent:peers>31</torrent:peers>",
            "<torrent:peers>many</torrent:peers>",
        );
        let err = parse_rss(&xml).unwrap_err();
        assert!(err.to_string().contains("torrent:peers"));
    }

    #[test]
    fn test_bad_date_fails() {
        let xml = fixtures::SEARCH_RSS.replace(
            "Sun, 05 Aug 2018 12:00:00 +0000",
            "last tuesday",
        );
        assert!(matches!(parse_rss(&xml), Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_bad_url_fails() {
        let xml = fixtures::SEARCH_RSS.replace(
            "https://zooqle.com/download/abc12.torrent",
            "/download/abc12.torrent",
        );
        assert!(matches!(parse_rss(&xml), Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_not_xml() {
        let err = parse_rss("<html><body>503</body>").unwrap_err();
        assert!(matches!(err, SearchError::ParseError(_)));
    }

    #[test]
    fn test_wrong_root() {
        let err = parse_rss("<feed></feed>").unwrap_err();
        assert!(err.to_string().contains("<feed>"));
    }
}
