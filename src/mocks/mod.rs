//! Mock implementations for testing.
//!
//! This module provides mock implementations of transport and authentication
//! components for testing the summarizer client in isolation.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::auth::AuthManager;
use crate::transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, StreamingResponse, TransportError,
};

/// Mock HTTP transport for testing.
///
/// This mock allows tests to enqueue responses and verify requests in a controlled manner.
/// Supports both regular and streaming responses.
///
/// # Example
///
/// ```
/// use transcript_summarizer::mocks::MockHttpTransport;
/// use transcript_summarizer::transport::{HttpRequest, HttpMethod, HttpTransport};
/// use std::collections::HashMap;
///
/// #[tokio::test]
/// async fn test_with_mock() {
///     let transport = MockHttpTransport::new();
///
///     // Enqueue a successful response
///     transport.enqueue_json_response(200, r#"{"status": "ok"}"#);
///
///     // Make a request
///     let request = HttpRequest {
///         method: HttpMethod::Get,
///         url: "https://example.com".to_string(),
///         headers: HashMap::new(),
///         body: None,
///     };
///
///     let response = transport.send(request).await.unwrap();
///     assert_eq!(response.status, 200);
///
///     // Verify the request was made
///     transport.verify_request_count(1);
/// }
/// ```
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    streaming_responses: Arc<Mutex<VecDeque<Result<(u16, Vec<Bytes>), TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            streaming_responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue an error response.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Enqueue a streaming response delivered as the given body fragments.
    pub fn enqueue_streaming_response(&self, status: u16, chunks: Vec<Bytes>) {
        self.streaming_responses
            .lock()
            .unwrap()
            .push_back(Ok((status, chunks)));
    }

    /// Enqueue a streaming error.
    pub fn enqueue_streaming_error(&self, error: TransportError) {
        self.streaming_responses.lock().unwrap().push_back(Err(error));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Verify that a request was made with the expected method and URL.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Expected method {:?}, got {:?}", method, request.method);
        assert!(
            request.url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Verify that a request contains a specific header.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        let actual_value = request.headers.get(header_name);
        assert_eq!(
            actual_value,
            Some(&header_value.to_string()),
            "Expected header '{}' to be '{}', got {:?}",
            header_name,
            header_value,
            actual_value
        );
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        // Record the request
        self.requests.lock().unwrap().push(request);

        // Return the next response or an error if none configured
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No response configured in MockHttpTransport".to_string(),
                ))
            })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<StreamingResponse, TransportError> {
        // Record the request
        self.requests.lock().unwrap().push(request);

        // Get the next streaming response
        let (status, chunks) = self
            .streaming_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No streaming response configured in MockHttpTransport".to_string(),
                ))
            })?;

        // Convert chunks to a stream
        let body = stream::iter(chunks.into_iter().map(Ok));

        Ok(StreamingResponse {
            status,
            headers: HashMap::new(),
            body: Box::pin(body),
        })
    }
}

/// Mock authentication manager for testing.
///
/// This mock allows tests to verify authentication behavior without using real API keys.
///
/// # Example
///
/// ```
/// use transcript_summarizer::mocks::MockAuthManager;
/// use transcript_summarizer::auth::AuthManager;
///
/// let auth = MockAuthManager::new("test-api-key");
/// let param = auth.get_auth_query_param();
/// assert_eq!(param, Some(("key".to_string(), "test-api-key".to_string())));
/// ```
#[derive(Clone)]
pub struct MockAuthManager {
    api_key: String,
    use_header: bool,
}

impl MockAuthManager {
    /// Create a new mock auth manager with the given API key.
    /// By default, uses query parameter authentication.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            use_header: false,
        }
    }

    /// Create a mock auth manager that uses header authentication.
    pub fn with_header(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            use_header: true,
        }
    }
}

impl AuthManager for MockAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        if self.use_header {
            Some(("x-goog-api-key".to_string(), self.api_key.clone()))
        } else {
            None
        }
    }

    fn get_auth_query_param(&self) -> Option<(String, String)> {
        if !self.use_header {
            Some(("key".to_string(), self.api_key.clone()))
        } else {
            None
        }
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(self.clone())
    }
}
