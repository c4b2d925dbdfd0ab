//! Mock transport for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use url::Url;

use crate::client::Transport;
use crate::search::SearchError;

/// A recorded request for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path relative to the base URL.
    pub path: String,
    /// Query parameters in the order they were given.
    pub params: Vec<(String, String)>,
    /// When the request was made.
    pub timestamp: Instant,
}

impl RecordedRequest {
    /// Value of the first query parameter with the given name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Mock implementation of the Transport trait.
///
/// Provides controllable behavior for testing:
/// - Serve a configurable response body
/// - Record requests for assertions
/// - Fail the next request with a given error
#[derive(Debug, Clone)]
pub struct MockTransport {
    base_url: Url,
    /// Body returned by every successful request.
    body: Arc<RwLock<String>>,
    /// If set, the next request fails with this error.
    next_error: Arc<RwLock<Option<SearchError>>>,
    /// Recorded requests.
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::with_body("")
    }
}

impl MockTransport {
    /// Create a mock transport that answers every request with `body`.
    pub fn with_body(body: &str) -> Self {
        Self {
            base_url: Url::parse("https://zooqle.com/").expect("static URL is valid"),
            body: Arc::new(RwLock::new(body.to_string())),
            next_error: Arc::new(RwLock::new(None)),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Replace the response body for subsequent requests.
    pub async fn set_body(&self, body: &str) {
        *self.body.write().await = body.to_string();
    }

    /// Configure the next request to fail with the given error.
    pub async fn set_next_error(&self, error: SearchError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get recorded requests.
    pub async fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    /// Get the number of requests made.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_text(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, SearchError> {
        self.requests.write().await.push(RecordedRequest {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            timestamp: Instant::now(),
        });

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self.body.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_requests() {
        tokio_test::block_on(async {
            let transport = MockTransport::with_body("ok");
            let body = transport
                .get_text("search", &[("q", "ubuntu".to_string())])
                .await
                .unwrap();

            assert_eq!(body, "ok");
            let requests = transport.recorded_requests().await;
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0].path, "search");
            assert_eq!(requests[0].param("q"), Some("ubuntu"));
            assert_eq!(requests[0].param("pg"), None);
        });
    }

    #[test]
    fn test_next_error_is_used_once() {
        tokio_test::block_on(async {
            let transport = MockTransport::with_body("ok");
            transport
                .set_next_error(SearchError::ConnectionFailed("refused".to_string()))
                .await;

            assert!(transport.get_text("search", &[]).await.is_err());
            assert!(transport.get_text("search", &[]).await.is_ok());
            assert_eq!(transport.request_count().await, 2);
        });
    }

    #[test]
    fn test_set_body() {
        tokio_test::block_on(async {
            let transport = MockTransport::default();
            transport.set_body("[]").await;
            assert_eq!(transport.get_text("qss/x", &[]).await.unwrap(), "[]");
        });
    }
}
