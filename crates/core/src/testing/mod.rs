//! Testing utilities and mock implementations.
//!
//! This module provides a mock [`Transport`](crate::client::Transport) and
//! sample response documents, allowing client tests without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use zooqle_core::testing::{fixtures, MockTransport};
//! use zooqle_core::ZooqleClient;
//!
//! let transport = MockTransport::with_body(fixtures::SEARCH_RSS);
//! let client = ZooqleClient::new(transport);
//!
//! let page = client.search("ubuntu", 1).await?;
//! assert_eq!(page.results.len(), 2);
//! ```

mod mock_transport;

pub use mock_transport::{MockTransport, RecordedRequest};

/// Sample response documents.
pub mod fixtures {
    /// A search feed with two results on the second page of three.
    pub const SEARCH_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/" xmlns:torrent="https://zooqle.com/xmlns/0.1/index.xmlns">
  <channel>
    <title>zooqle.com - Search: ubuntu</title>
    <link>https://zooqle.com/search?q=ubuntu</link>
    <description>Search results for ubuntu</description>
    <opensearch:totalResults>61</opensearch:totalResults>
    <opensearch:startIndex>30</opensearch:startIndex>
    <opensearch:itemsPerPage>30</opensearch:itemsPerPage>
    <opensearch:Query role="request" searchTerms="ubuntu &amp;quot;desktop&amp;quot;" startPage="2"/>
    <item>
      <title>Ubuntu 18.04.1 Desktop amd64</title>
      <description>Ubuntu 18.04.1 Desktop amd64, 1.82 GB</description>
      <link>https://zooqle.com/ubuntu-18-04-1-desktop-amd64-abc12.html</link>
      <guid isPermaLink="true">https://zooqle.com/ubuntu-18-04-1-desktop-amd64-abc12.html</guid>
      <pubDate>Sun, 05 Aug 2018 12:00:00 +0000</pubDate>
      <enclosure url="https://zooqle.com/download/abc12.torrent" length="1953349632" type="application/x-bittorrent"/>
      <torrent:contentLength>1953349632</torrent:contentLength>
      <torrent:infoHash>c9e15763f722f23e98a29decdfae341b98d53056</torrent:infoHash>
      <torrent:magnetURI><![CDATA[magnet:?xt=urn:btih:c9e15763f722f23e98a29decdfae341b98d53056&dn=ubuntu-18.04.1-desktop-amd64.iso]]></torrent:magnetURI>
      <torrent:seeds>1520</torrent:seeds>
      <torrent:peers>31</torrent:peers>
    </item>
    <item>
      <title>Ubuntu 16.04.5 Desktop i386</title>
      <description>Ubuntu 16.04.5 Desktop i386, 1.57 GB</description>
      <link>https://zooqle.com/ubuntu-16-04-5-desktop-i386-def34.html</link>
      <guid isPermaLink="true">https://zooqle.com/ubuntu-16-04-5-desktop-i386-def34.html</guid>
      <pubDate>Tue, 07 Aug 2018 23:30:00 -0200</pubDate>
      <enclosure url="https://zooqle.com/download/def34.torrent" length="1685061632" type="application/x-bittorrent"/>
      <torrent:contentLength>1685061632</torrent:contentLength>
      <torrent:infoHash>a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9</torrent:infoHash>
      <torrent:magnetURI><![CDATA[magnet:?xt=urn:btih:a0b1c2d3e4f5a6b7c8d9e0f1a2b3c4d5e6f7a8b9&dn=ubuntu-16.04.5-desktop-i386.iso]]></torrent:magnetURI>
      <torrent:seeds>204</torrent:seeds>
      <torrent:peers>7</torrent:peers>
    </item>
  </channel>
</rss>
"#;

    /// A search feed without matches.
    pub const EMPTY_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/" xmlns:torrent="https://zooqle.com/xmlns/0.1/index.xmlns">
  <channel>
    <title>zooqle.com - Search: qwertyuiop</title>
    <link>https://zooqle.com/search?q=qwertyuiop</link>
    <description>Search results for qwertyuiop</description>
    <opensearch:totalResults>0</opensearch:totalResults>
    <opensearch:startIndex>0</opensearch:startIndex>
    <opensearch:itemsPerPage>30</opensearch:itemsPerPage>
    <opensearch:Query role="request" searchTerms="qwertyuiop" startPage="1"/>
  </channel>
</rss>
"#;

    /// An item lookup response with a movie and an actor.
    pub const ITEMS_JSON: &str = r#"[
  {"t": "m", "n": "The Shawshank Redemption", "id": "tt0111161", "c": 42, "i": 1234, "d": 1994},
  {"t": "a", "n": "Morgan Freeman", "id": "nm0000151", "c": 310}
]"#;
}
