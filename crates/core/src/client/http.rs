//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::Transport;
use crate::config::ClientConfig;
use crate::search::SearchError;

const ACCEPT_TYPES: &str = "application/rss+xml, application/json;q=0.9";

/// Transport that issues GET requests against the configured site.
///
/// The underlying client is built once with fixed headers and shared by all
/// requests.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new HttpTransport with the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SearchError::InvalidArgument(format!("Invalid base URL {}: {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_TYPES));

        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .default_headers(headers)
            .user_agent(user_agent)
            .build()
            .map_err(|e| SearchError::ConnectionFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_text(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, SearchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| SearchError::InvalidArgument(format!("Invalid path {}: {}", path, e)))?;

        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        response.text().await.map_err(map_request_error)
    }
}

fn map_request_error(e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout
    } else if e.is_connect() {
        SearchError::ConnectionFailed(e.to_string())
    } else {
        SearchError::ApiError {
            status: e.status().map(|s| s.as_u16()).unwrap_or(0),
            message: e.to_string(),
        }
    }
}

fn default_user_agent() -> String {
    format!("zooqle-core/{}", env!("CARGO_PKG_VERSION"))
}
