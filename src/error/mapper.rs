//! Error mapping utilities for HTTP status codes and API responses.

use serde::Deserialize;
use super::categories::*;
use super::types::SummarizerError;

/// Structured API error response from the Generative Language API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Detailed error information from the API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: i32,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Maps an HTTP status code and response body to the appropriate error variant.
///
/// Parses the API's `{"error": {...}}` envelope and maps it to the most
/// specific error type based on status code and error message content. When
/// no message can be extracted from the body, the error carries a generic
/// status-coded message.
pub fn map_http_status_with_body(status: u16, body: &[u8]) -> SummarizerError {
    // Try to parse structured error response
    let (message, error_details) =
        if let Ok(error_response) = serde_json::from_slice::<ApiErrorResponse>(body) {
            (
                error_response.error.message.clone(),
                Some(error_response.error),
            )
        } else {
            // Fallback to generic JSON parsing, then to the raw body
            let body_str = String::from_utf8_lossy(body).to_string();
            if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
                if let Some(msg) = json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    (msg.to_string(), None)
                } else {
                    (body_str, None)
                }
            } else {
                (body_str, None)
            }
        };

    let message = if message.trim().is_empty() {
        format!("API Error: {}", status)
    } else {
        message
    };

    match status {
        // 400 Bad Request - Request validation errors
        400 => {
            let details = error_details
                .as_ref()
                .map(|e| parse_validation_details(&e.details))
                .unwrap_or_default();

            SummarizerError::Request(RequestError::ValidationError { message, details })
        }

        // 401 Unauthorized - Authentication errors
        401 => SummarizerError::Authentication(AuthenticationError::InvalidApiKey),

        // 403 Forbidden - Could be quota or permissions
        403 => {
            if message.to_lowercase().contains("quota") {
                SummarizerError::Authentication(AuthenticationError::QuotaExceeded)
            } else if let Some(ref details) = error_details {
                if details.status.to_uppercase().contains("PERMISSION_DENIED") {
                    SummarizerError::Authentication(AuthenticationError::QuotaExceeded)
                } else {
                    SummarizerError::Authentication(AuthenticationError::InvalidApiKey)
                }
            } else {
                SummarizerError::Authentication(AuthenticationError::InvalidApiKey)
            }
        }

        // 404 Not Found - the only addressable resource here is the model
        404 => SummarizerError::Resource(ResourceError::ModelNotFound {
            model: extract_resource_name(&message),
        }),

        // 413 Payload Too Large
        413 => {
            let (size, max_size) = extract_size_info(&message);
            SummarizerError::Request(RequestError::PayloadTooLarge { size, max_size })
        }

        // 429 Too Many Requests - Rate limiting
        429 => SummarizerError::RateLimit(RateLimitError::TooManyRequests {
            retry_after: None, // Will be set from headers by response parser
        }),

        // 500 Internal Server Error
        500 => SummarizerError::Server(ServerError::InternalError { message }),

        // 503 Service Unavailable
        503 => {
            if message.to_lowercase().contains("overload") {
                SummarizerError::Server(ServerError::ModelOverloaded {
                    model: extract_resource_name(&message),
                })
            } else {
                SummarizerError::Server(ServerError::ServiceUnavailable {
                    retry_after: None, // Will be set from headers by response parser
                })
            }
        }

        // Default: treat as server error
        _ => SummarizerError::Server(ServerError::InternalError {
            message: format!("HTTP {}: {}", status, message),
        }),
    }
}

/// Extracts a model/resource name from an error message (simple heuristic).
fn extract_resource_name(message: &str) -> String {
    // Look for path-style identifiers like "models/gemini-2.5-flash"
    if let Some(found) = message
        .split_whitespace()
        .find(|s| s.starts_with("models/"))
    {
        return found
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '/' && c != '-' && c != '_')
            .to_string();
    }

    // Try to extract from quotes
    if let Some(start) = message.find('\'') {
        if let Some(end) = message[start + 1..].find('\'') {
            return message[start + 1..start + 1 + end].to_string();
        }
    }

    if let Some(start) = message.find('"') {
        if let Some(end) = message[start + 1..].find('"') {
            return message[start + 1..start + 1 + end].to_string();
        }
    }

    "unknown".to_string()
}

/// Extracts size information from an error message.
fn extract_size_info(message: &str) -> (usize, usize) {
    // Parse numbers from messages like "size 1000000 exceeds max 500000"
    let numbers: Vec<usize> = message
        .split_whitespace()
        .filter_map(|s| s.trim_matches(|c: char| !c.is_numeric()).parse().ok())
        .collect();

    match numbers.len() {
        0 => (0, 0),
        1 => (numbers[0], 0),
        _ => (numbers[0], numbers[1]),
    }
}

/// Parses validation details from an error response details array.
fn parse_validation_details(details: &[serde_json::Value]) -> Vec<ValidationDetail> {
    let mut result = Vec::new();

    for detail in details {
        if let Some(obj) = detail.as_object() {
            let field = obj
                .get("field")
                .or_else(|| obj.get("fieldPath"))
                .and_then(|v| v.as_str())
                .unwrap_or("unknown");

            let description = obj
                .get("description")
                .or_else(|| obj.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("");

            if !description.is_empty() {
                result.push(ValidationDetail {
                    field: field.to_string(),
                    description: description.to_string(),
                });
            }
        }
    }

    result
}
