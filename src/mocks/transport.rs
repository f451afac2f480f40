//! Mock HTTP transport for testing.

use crate::error::{NetworkError, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

/// Mock HTTP response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Bytes,
}

impl MockResponse {
    /// Response with the given status and body.
    pub fn with_status(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// 200 with an empty body.
    pub fn ok() -> Self {
        Self::with_status(200, Bytes::new())
    }

    /// 200 with a body.
    pub fn ok_with_body(body: impl Into<Bytes>) -> Self {
        Self::with_status(200, body)
    }

    /// 200 with a JSON body.
    pub fn json(value: &serde_json::Value) -> Self {
        Self::ok_with_body(value.to_string()).with_header("content-type", "application/json")
    }

    /// Non-success response.
    pub fn error(status: u16, body: impl Into<Bytes>) -> Self {
        Self::with_status(status, body)
    }

    /// Add a header to the response.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Builder for a [`MockTransport`] with a scripted sequence of responses.
#[derive(Debug, Default)]
pub struct MockResponseBuilder {
    responses: Vec<MockResponse>,
}

impl MockResponseBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response to return.
    pub fn respond(mut self, response: MockResponse) -> Self {
        self.responses.push(response);
        self
    }

    /// Build the mock transport.
    pub fn build(self) -> MockTransport {
        MockTransport::with_responses(self.responses)
    }
}

/// Transport that records every request and answers from a script.
///
/// Queued responses are returned first, in order; after that the default
/// response (if any) is returned. With neither, `send` fails with a
/// connection error.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    default_response: Option<MockResponse>,
}

impl MockTransport {
    /// Create a mock transport with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport with queued responses.
    pub fn with_responses(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Create a mock transport with a default response.
    pub fn with_default(response: MockResponse) -> Self {
        Self {
            default_response: Some(response),
            ..Self::default()
        }
    }

    /// Create a builder for the mock transport.
    pub fn builder() -> MockResponseBuilder {
        MockResponseBuilder::new()
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests made.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request);

        let next = self
            .responses
            .lock()
            .pop_front()
            .or_else(|| self.default_response.clone());

        match next {
            Some(mock) => Ok(HttpResponse {
                status: mock.status,
                headers: mock.headers,
                body: mock.body,
            }),
            None => Err(NetworkError::ConnectionFailed {
                message: "no mock response available".to_string(),
            }
            .into()),
        }
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("queued_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpMethod;

    #[tokio::test]
    async fn test_responses_in_order_then_default() {
        let transport = MockTransport::builder()
            .respond(MockResponse::ok_with_body("first"))
            .respond(MockResponse::error(404, "missing"))
            .build();

        let first = transport
            .send(HttpRequest::new(HttpMethod::Get, "https://example.com/1"))
            .await
            .unwrap();
        assert_eq!(first.body, Bytes::from("first"));

        let second = transport
            .send(HttpRequest::new(HttpMethod::Get, "https://example.com/2"))
            .await
            .unwrap();
        assert_eq!(second.status, 404);

        let third = transport
            .send(HttpRequest::new(HttpMethod::Get, "https://example.com/3"))
            .await;
        assert!(third.unwrap_err().is_network());
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_records_requests() {
        let transport = MockTransport::with_default(MockResponse::ok());

        let request = HttpRequest::new(HttpMethod::Post, "https://example.com")
            .with_header("X-LS-Key", "k1")
            .with_body("e30=");
        transport.send(request).await.unwrap();

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.method, HttpMethod::Post);
        assert_eq!(recorded.get_header("x-ls-key"), Some("k1"));
        assert_eq!(recorded.body, Some(Bytes::from("e30=")));
    }

    #[test]
    fn test_response_constructors() {
        let ok = MockResponse::ok();
        assert_eq!(ok.status, 200);
        assert!(ok.body.is_empty());

        let created = MockResponse::with_status(201, "made");
        assert_eq!(created.status, 201);
        assert_eq!(created.body, Bytes::from("made"));

        assert_eq!(MockResponse::ok_with_body("x").status, 200);
        assert_eq!(MockResponse::error(500, "boom").status, 500);
    }

    #[test]
    fn test_json_response() {
        let response = MockResponse::json(&serde_json::json!({"ok": true}));
        assert_eq!(response.headers["content-type"], "application/json");
        assert_eq!(response.body, Bytes::from(r#"{"ok":true}"#));
    }
}
