//! Mock HTTP client for testing.
//!
//! A configurable test double for the [`HttpClient`] trait. Responses are
//! matched by URL path suffix, and every request is recorded so tests can
//! assert on call counts and request shapes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client.
///
/// Clones share the same recorded-request and response state, so a test can
/// hand a clone to the code under test and inspect calls on the original.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses keyed by URL substring
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response returned for URLs containing `url_part`.
    pub fn set_response(&self, url_part: &str, response: MockResponse) {
        self.responses
            .lock()
            .expect("mock responses lock")
            .insert(url_part.to_string(), response);
    }

    /// Number of requests issued through this client.
    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("mock requests lock").len()
    }

    /// All requests issued through this client.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }

    fn record(&self, method: &str, url: &str, headers: &Headers, body: Option<&str>) {
        self.requests
            .lock()
            .expect("mock requests lock")
            .push(RecordedRequest {
                method: method.to_string(),
                url: url.to_string(),
                headers: headers.clone(),
                body: body.map(|b| b.to_string()),
            });
    }

    fn lookup(&self, url: &str) -> Result<Response, HttpError> {
        let responses = self.responses.lock().expect("mock responses lock");
        let matched = responses
            .iter()
            .find(|(part, _)| url.contains(part.as_str()))
            .map(|(_, response)| response.clone());

        match matched {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("GET", url, headers, None);
        self.lookup(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("POST", url, headers, Some(body));
        self.lookup(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_returns_configured_response() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "/books",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = mock
            .get("http://test/api/v1/books", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "/login",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = mock.post("http://test/login", "{}", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_mock_unconfigured_url_errors() {
        let mock = MockHttpClient::new();
        let result = mock.get("http://test/unknown", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "/register",
            MockResponse::Success(Response::new(201, Bytes::from("{}"))),
        );

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        mock.post("http://test/register", r#"{"name":"a"}"#, &headers)
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"name":"a"}"#));
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_mock_clone_shares_state() {
        let mock = MockHttpClient::new();
        mock.set_response(
            "/books",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let clone = mock.clone();
        clone
            .get("http://test/books", &Headers::new())
            .await
            .unwrap();

        assert_eq!(mock.call_count(), 1);
    }
}
