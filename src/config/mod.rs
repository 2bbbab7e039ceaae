//! Configuration types for the summarizer client.

use crate::error::{ConfigurationError, SummarizerError};
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Default Generative Language API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1beta";

/// Default model for transcript and long-text summaries.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default model for one-shot snippet summaries.
pub const DEFAULT_ONESHOT_MODEL: &str = "gemma-3-4b";

/// Default maximum chunk size in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 3500;

/// Default request timeout (120 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Authentication method for API key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMethod {
    /// Use x-goog-api-key header.
    Header,
    /// Use ?key= query parameter.
    #[default]
    QueryParam,
}

/// Log level for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

/// Configuration for the summarizer client.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// API key (required).
    pub api_key: SecretString,
    /// Base URL for the API.
    pub base_url: Url,
    /// API version.
    pub api_version: String,
    /// Model used for transcript and long-text summaries.
    pub model: String,
    /// Model used for one-shot snippet summaries.
    pub oneshot_model: String,
    /// Maximum transcript chunk size in characters.
    pub max_chunk_size: usize,
    /// Default timeout for requests.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Log level.
    pub log_level: LogLevel,
    /// Authentication method.
    pub auth_method: AuthMethod,
}

impl SummarizerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, SummarizerError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| ConfigurationError::MissingApiKey)?;

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_version = std::env::var("GEMINI_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::builder()
            .api_key(SecretString::new(api_key.into()))
            .base_url(&base_url)?
            .api_version(&api_version)
            .model(&model)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }
}

/// Builder for SummarizerConfig.
#[derive(Default)]
pub struct SummarizerConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<Url>,
    api_version: Option<String>,
    model: Option<String>,
    oneshot_model: Option<String>,
    max_chunk_size: Option<usize>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    log_level: Option<LogLevel>,
    auth_method: Option<AuthMethod>,
}

impl SummarizerConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, SummarizerError> {
        let url = Url::parse(base_url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the API version.
    pub fn api_version(mut self, version: &str) -> Self {
        self.api_version = Some(version.to_string());
        self
    }

    /// Set the model used for transcript and long-text summaries.
    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Set the model used for one-shot snippet summaries.
    pub fn oneshot_model(mut self, model: &str) -> Self {
        self.oneshot_model = Some(model.to_string());
        self
    }

    /// Set the maximum chunk size in characters.
    pub fn max_chunk_size(mut self, size: usize) -> Self {
        self.max_chunk_size = Some(size);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SummarizerConfig, SummarizerError> {
        let api_key = self.api_key
            .ok_or(ConfigurationError::MissingApiKey)?;

        let base_url = self.base_url
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).unwrap());

        let max_chunk_size = self.max_chunk_size.unwrap_or(DEFAULT_MAX_CHUNK_SIZE);
        if max_chunk_size == 0 {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "max_chunk_size must be at least 1".to_string(),
            }
            .into());
        }

        Ok(SummarizerConfig {
            api_key,
            base_url,
            api_version: self.api_version.unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            oneshot_model: self.oneshot_model.unwrap_or_else(|| DEFAULT_ONESHOT_MODEL.to_string()),
            max_chunk_size,
            timeout: self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            connect_timeout: self.connect_timeout.unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            log_level: self.log_level.unwrap_or_default(),
            auth_method: self.auth_method.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://generativelanguage.googleapis.com/");
        assert_eq!(config.api_version, "v1beta");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.oneshot_model, "gemma-3-4b");
        assert_eq!(config.max_chunk_size, 3500);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.auth_method, AuthMethod::QueryParam);
    }

    #[test]
    fn test_custom_config() {
        let config = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .api_version("v1")
            .model("gemini-2.0-flash")
            .max_chunk_size(500)
            .timeout(Duration::from_secs(60))
            .auth_method(AuthMethod::Header)
            .build()
            .unwrap();

        assert_eq!(config.api_version, "v1");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.max_chunk_size, 500);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.auth_method, AuthMethod::Header);
    }

    #[test]
    fn test_missing_api_key() {
        let result = SummarizerConfig::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let result = SummarizerConfig::builder()
            .api_key(SecretString::new("test-key".into()))
            .max_chunk_size(0)
            .build();

        assert!(matches!(
            result,
            Err(SummarizerError::Configuration(
                ConfigurationError::InvalidConfiguration { .. }
            ))
        ));
    }
}
