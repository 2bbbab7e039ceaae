//! HTTP response parser for the Generative Language API.
//!
//! This module provides the `ResponseParser` for parsing HTTP responses,
//! handling errors, and extracting metadata like retry-after headers.

use serde::de::DeserializeOwned;
use std::time::Duration;

use super::http::HttpResponse;
use crate::error::{map_http_status_with_body, RateLimitError, ServerError, SummarizerError};

/// Parser for HTTP responses from the API.
///
/// The `ResponseParser` handles:
/// - Successful response deserialization
/// - Error response parsing and mapping to error types
/// - Retry-after header extraction
/// - Request ID extraction for debugging
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a successful HTTP response into the expected type.
    ///
    /// # Arguments
    ///
    /// * `response` - The HTTP response to parse
    ///
    /// # Returns
    ///
    /// A `Result` containing the deserialized response or a `SummarizerError`
    ///
    /// # Example
    ///
    /// ```
    /// use transcript_summarizer::transport::{HttpResponse, ResponseParser};
    /// use bytes::Bytes;
    /// use serde::Deserialize;
    /// use std::collections::HashMap;
    ///
    /// #[derive(Deserialize)]
    /// struct ModelInfo {
    ///     name: String,
    /// }
    ///
    /// let response = HttpResponse {
    ///     status: 200,
    ///     headers: HashMap::new(),
    ///     body: Bytes::from(r#"{"name":"gemini-2.5-flash"}"#),
    /// };
    ///
    /// let parsed: ModelInfo = ResponseParser::parse_response(response).unwrap();
    /// assert_eq!(parsed.name, "gemini-2.5-flash");
    /// ```
    pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, SummarizerError> {
        // Check if the status code indicates success
        if response.status >= 200 && response.status < 300 {
            // Deserialize the response body
            let parsed: T = serde_json::from_slice(&response.body)?;
            Ok(parsed)
        } else {
            // Parse error response
            Err(Self::parse_error_response(response))
        }
    }

    /// Parses an error response and maps it to the appropriate error type.
    ///
    /// The response body is parsed for the API error envelope and the
    /// HTTP status mapped to a specific error variant. Retry-after
    /// information from headers overrides whatever the body carried.
    ///
    /// # Arguments
    ///
    /// * `response` - The HTTP error response
    ///
    /// # Returns
    ///
    /// A `SummarizerError` representing the error with all available details
    pub fn parse_error_response(response: HttpResponse) -> SummarizerError {
        let retry_after = Self::parse_retry_after(&response.headers);
        let request_id = Self::extract_request_id(&response.headers);

        let mut error = map_http_status_with_body(response.status, &response.body);

        // Update retry_after from headers for rate limit errors
        if let SummarizerError::RateLimit(ref mut rate_limit_error) = error {
            match rate_limit_error {
                RateLimitError::TooManyRequests { retry_after: ref mut ra } => {
                    *ra = retry_after;
                }
                RateLimitError::QuotaExceeded { retry_after: ref mut ra } => {
                    *ra = retry_after;
                }
            }
        }

        // Update retry_after from headers for server errors
        if let SummarizerError::Server(ref mut server_error) = error {
            if let ServerError::ServiceUnavailable { retry_after: ref mut ra } = server_error {
                *ra = retry_after;
            }
        }

        // Log request ID if available for debugging
        if let Some(ref id) = request_id {
            tracing::debug!(
                request_id = %id,
                status = response.status,
                error = ?error,
                "API error occurred"
            );
        }

        error
    }

    /// Parses the Retry-After header from the response.
    ///
    /// Only the delay-in-seconds form is recognized; HTTP dates are
    /// ignored.
    ///
    /// # Arguments
    ///
    /// * `headers` - The response headers
    ///
    /// # Returns
    ///
    /// An `Option<Duration>` containing the retry delay if present
    ///
    /// # Example
    ///
    /// ```
    /// use transcript_summarizer::transport::ResponseParser;
    /// use std::collections::HashMap;
    /// use std::time::Duration;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert("retry-after".to_string(), "60".to_string());
    ///
    /// let retry_after = ResponseParser::parse_retry_after(&headers);
    /// assert_eq!(retry_after, Some(Duration::from_secs(60)));
    /// ```
    pub fn parse_retry_after(headers: &std::collections::HashMap<String, String>) -> Option<Duration> {
        // Check for Retry-After header (case-insensitive)
        for (key, value) in headers {
            if key.to_lowercase() == "retry-after" {
                if let Ok(seconds) = value.parse::<u64>() {
                    return Some(Duration::from_secs(seconds));
                }
            }
        }
        None
    }

    /// Extracts the request ID from response headers for debugging.
    ///
    /// # Arguments
    ///
    /// * `headers` - The response headers
    ///
    /// # Returns
    ///
    /// An `Option<String>` containing the request ID if present
    pub fn extract_request_id(headers: &std::collections::HashMap<String, String>) -> Option<String> {
        // Common request ID header names (case-insensitive)
        let possible_headers = ["x-request-id", "x-goog-request-id", "request-id"];

        for (key, value) in headers {
            let key_lower = key.to_lowercase();
            if possible_headers.contains(&key_lower.as_str()) {
                return Some(value.clone());
            }
        }
        None
    }
}
