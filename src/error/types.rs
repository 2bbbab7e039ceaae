//! Main error type for the summarizer client.

use std::time::Duration;
use thiserror::Error;
use super::categories::*;

/// Result type alias for summarizer operations.
pub type SummarizerResult<T> = Result<T, SummarizerError>;

/// Top-level error type for the summarizer integration.
#[derive(Error, Debug, Clone)]
pub enum SummarizerError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),
}

impl SummarizerError {
    /// Returns the retry-after duration if the server provided one.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            SummarizerError::RateLimit(e) => e.retry_after(),
            SummarizerError::Server(ServerError::ServiceUnavailable { retry_after }) => {
                *retry_after
            }
            _ => None,
        }
    }
}

// Implement From for common error types
impl From<reqwest::Error> for SummarizerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SummarizerError::Network(NetworkError::Timeout {
                duration: Duration::from_secs(0), // Unknown actual duration
            })
        } else {
            SummarizerError::Network(NetworkError::ConnectionFailed {
                message: err.to_string(),
            })
        }
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        SummarizerError::Response(ResponseError::DeserializationError {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for SummarizerError {
    fn from(err: url::ParseError) -> Self {
        SummarizerError::Configuration(ConfigurationError::InvalidBaseUrl {
            url: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after() {
        let rate_limit = SummarizerError::RateLimit(RateLimitError::TooManyRequests {
            retry_after: Some(Duration::from_secs(30)),
        });
        assert_eq!(rate_limit.retry_after(), Some(Duration::from_secs(30)));

        let config_error = SummarizerError::Configuration(ConfigurationError::MissingApiKey);
        assert_eq!(config_error.retry_after(), None);
    }

    #[test]
    fn test_summary_error_messages() {
        let empty = SummarizerError::Summary(SummaryError::EmptyTranscript);
        assert!(empty.to_string().contains("No transcript chunks to summarize"));

        let none = SummarizerError::Summary(SummaryError::NoPartialSummaries);
        assert!(none.to_string().contains("Failed to generate any partial summaries"));

        let blocked = SummarizerError::Summary(SummaryError::NoSummaryGenerated);
        assert!(blocked
            .to_string()
            .contains("No summary generated. The content might have been blocked."));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: SummarizerError = json_err.into();
        assert!(matches!(
            error,
            SummarizerError::Response(ResponseError::DeserializationError { .. })
        ));
    }
}
