//! HTTP request builder for the Generative Language API.
//!
//! This module provides the `RequestBuilder` for constructing HTTP requests
//! with proper authentication, headers, and URL formatting.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;
use url::Url;

use super::http::{HttpMethod, HttpRequest};
use crate::auth::AuthManager;
use crate::error::SummarizerError;

/// Builder for constructing HTTP requests to the API.
///
/// The `RequestBuilder` handles:
/// - URL construction with API version prefixes
/// - Authentication via the configured auth manager
/// - Header management (Content-Type, custom headers)
/// - Request body serialization
#[derive(Clone)]
pub struct RequestBuilder {
    /// Base URL for the API.
    base_url: Url,
    /// API version (e.g., "v1beta").
    api_version: String,
    /// Authentication manager.
    auth_manager: Box<dyn AuthManager>,
}

impl RequestBuilder {
    /// Creates a new request builder.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the API
    /// * `api_version` - The API version to use (e.g., "v1beta")
    /// * `auth_manager` - The authentication manager
    ///
    /// # Example
    ///
    /// ```no_run
    /// use transcript_summarizer::auth::ApiKeyAuthManager;
    /// use transcript_summarizer::config::SummarizerConfig;
    /// use transcript_summarizer::transport::RequestBuilder;
    /// use secrecy::SecretString;
    ///
    /// let config = SummarizerConfig::builder()
    ///     .api_key(SecretString::new("test-key".into()))
    ///     .build()
    ///     .unwrap();
    ///
    /// let auth_manager = ApiKeyAuthManager::from_config(&config);
    /// let builder = RequestBuilder::new(
    ///     config.base_url.clone(),
    ///     config.api_version.clone(),
    ///     Box::new(auth_manager),
    /// );
    /// ```
    pub fn new(
        base_url: Url,
        api_version: String,
        auth_manager: Box<dyn AuthManager>,
    ) -> Self {
        Self {
            base_url,
            api_version,
            auth_manager,
        }
    }

    /// Builds a complete URL for the given path.
    ///
    /// This method:
    /// - Prepends the API version to the path
    /// - Joins the path with the base URL
    /// - Adds authentication query parameters if needed
    ///
    /// # Arguments
    ///
    /// * `path` - The endpoint path (e.g., "/models/gemini-2.5-flash:generateContent")
    ///
    /// # Returns
    ///
    /// A `Result` containing the complete URL or a `SummarizerError`
    pub fn build_url(&self, path: &str) -> Result<Url, SummarizerError> {
        // Remove leading slash if present
        let path = path.trim_start_matches('/');

        // Construct the full path with API version
        let full_path = format!("{}/{}", self.api_version, path);

        // Join with base URL
        let mut url = self.base_url.join(&full_path)?;

        // Add authentication query parameter if needed
        if let Some((key, value)) = self.auth_manager.get_auth_query_param() {
            url.query_pairs_mut().append_pair(&key, &value);
        }

        Ok(url)
    }

    /// Builds an HTTP request with the given parameters.
    ///
    /// This method:
    /// - Constructs the full URL
    /// - Serializes the request body to JSON
    /// - Adds required headers (Content-Type, authentication)
    /// - Merges any extra headers
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method (GET, POST)
    /// * `path` - The endpoint path
    /// * `body` - Optional request body (will be serialized to JSON)
    /// * `extra_headers` - Optional additional headers
    ///
    /// # Returns
    ///
    /// A `Result` containing the `HttpRequest` or a `SummarizerError`
    pub fn build_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<HttpRequest, SummarizerError> {
        let url = self.build_url(path)?;

        let mut headers = HashMap::new();

        // Add Content-Type header if there's a body
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        // Add authentication header if needed
        if let Some((key, value)) = self.auth_manager.get_auth_header() {
            headers.insert(key, value);
        }

        // Merge extra headers
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        // Serialize body to JSON if present
        let body_bytes = if let Some(body) = body {
            let json = serde_json::to_vec(body)?;
            Some(Bytes::from(json))
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            headers,
            body: body_bytes,
        })
    }

    /// Builds a streaming HTTP request.
    ///
    /// Convenience wrapper around `build_request` for POST streaming
    /// endpoints.
    ///
    /// # Arguments
    ///
    /// * `path` - The endpoint path (typically a streaming endpoint)
    /// * `body` - The request body (will be serialized to JSON)
    ///
    /// # Returns
    ///
    /// A `Result` containing the `HttpRequest` or a `SummarizerError`
    pub fn build_streaming_request<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<HttpRequest, SummarizerError> {
        self.build_request(HttpMethod::Post, path, Some(body), None)
    }
}
