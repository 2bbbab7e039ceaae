//! Builder for creating summarizer client instances.

use secrecy::SecretString;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::config::{AuthMethod, LogLevel, SummarizerConfig};
use crate::error::{ConfigurationError, NetworkError, SummarizerError};
use crate::observability::{
    Logger, MetricsRecorder, StructuredLogger, SummarizerMetrics, Tracer, TracingMetricsRecorder,
    TracingTracer,
};
use crate::transport::{HttpTransport, ReqwestTransport};

use super::client::SummarizerClientImpl;

/// Builder for creating a `SummarizerClient` instance.
///
/// Provides a fluent API for configuring and constructing a summarizer client.
///
/// # Example
///
/// ```no_run
/// use transcript_summarizer::SummarizerClientBuilder;
/// use secrecy::SecretString;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SummarizerClientBuilder::new()
///     .api_key(SecretString::new("your-api-key".into()))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SummarizerClientBuilder {
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

    // Injectable dependencies for testing
    transport: Option<Arc<dyn HttpTransport>>,
    logger: Option<Arc<dyn Logger>>,
    tracer: Option<Arc<dyn Tracer>>,
    metrics_recorder: Option<Box<dyn MetricsRecorder>>,
}

impl SummarizerClientBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            api_version: None,
            model: None,
            oneshot_model: None,
            max_chunk_size: None,
            timeout: None,
            connect_timeout: None,
            log_level: None,
            auth_method: None,
            transport: None,
            logger: None,
            tracer: None,
            metrics_recorder: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: SummarizerConfig) -> Self {
        Self {
            api_key: Some(config.api_key.clone()),
            base_url: Some(config.base_url.clone()),
            api_version: Some(config.api_version.clone()),
            model: Some(config.model.clone()),
            oneshot_model: Some(config.oneshot_model.clone()),
            max_chunk_size: Some(config.max_chunk_size),
            timeout: Some(config.timeout),
            connect_timeout: Some(config.connect_timeout),
            log_level: Some(config.log_level),
            auth_method: Some(config.auth_method),
            transport: None,
            logger: None,
            tracer: None,
            metrics_recorder: None,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL for the API.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the base URL from a string.
    pub fn base_url_str(mut self, url: &str) -> Result<Self, SummarizerError> {
        let parsed = Url::parse(url).map_err(|_| ConfigurationError::InvalidBaseUrl {
            url: url.to_string(),
        })?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: String) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the model used for transcript and long-text summaries.
    pub fn model(mut self, model: String) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the model used for one-shot snippet summaries.
    pub fn oneshot_model(mut self, model: String) -> Self {
        self.oneshot_model = Some(model);
        self
    }

    /// Sets the maximum transcript chunk size in characters.
    pub fn max_chunk_size(mut self, size: usize) -> Self {
        self.max_chunk_size = Some(size);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets the authentication method.
    pub fn auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = Some(method);
        self
    }

    /// Sets a custom HTTP transport (for testing).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom logger (for testing).
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sets a custom tracer (for testing).
    pub fn tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Sets a custom metrics recorder (for testing).
    pub fn metrics_recorder(mut self, recorder: Box<dyn MetricsRecorder>) -> Self {
        self.metrics_recorder = Some(recorder);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - API key is not provided and not found in environment variables
    /// - Invalid configuration values
    /// - Failed to create HTTP transport
    pub fn build(self) -> Result<SummarizerClientImpl, SummarizerError> {
        // Resolve API key from multiple sources (order: explicit -> GEMINI_API_KEY -> GOOGLE_API_KEY)
        let api_key = self.api_key
            .or_else(|| {
                std::env::var("GEMINI_API_KEY")
                    .or_else(|_| std::env::var("GOOGLE_API_KEY"))
                    .ok()
                    .map(|s| SecretString::new(s.into()))
            })
            .ok_or(ConfigurationError::MissingApiKey)?;

        // Build full configuration; unset values fall back to the
        // SummarizerConfig defaults
        let mut config_builder = SummarizerConfig::builder().api_key(api_key);

        if let Some(url) = &self.base_url {
            config_builder = config_builder.base_url(url.as_str())?;
        }
        if let Some(version) = &self.api_version {
            config_builder = config_builder.api_version(version);
        }
        if let Some(model) = &self.model {
            config_builder = config_builder.model(model);
        }
        if let Some(model) = &self.oneshot_model {
            config_builder = config_builder.oneshot_model(model);
        }
        if let Some(size) = self.max_chunk_size {
            config_builder = config_builder.max_chunk_size(size);
        }
        if let Some(timeout) = self.timeout {
            config_builder = config_builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            config_builder = config_builder.connect_timeout(timeout);
        }
        if let Some(level) = self.log_level {
            config_builder = config_builder.log_level(level);
        }
        if let Some(method) = self.auth_method {
            config_builder = config_builder.auth_method(method);
        }

        let config = config_builder.build()?;

        // Create transport
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                ReqwestTransport::new(config.timeout, config.connect_timeout).map_err(|e| {
                    SummarizerError::Network(NetworkError::ConnectionFailed {
                        message: format!("Failed to create HTTP transport: {}", e),
                    })
                })?,
            ),
        };

        // Create auth manager
        let auth_manager: Arc<dyn AuthManager> = Arc::new(
            ApiKeyAuthManager::from_config(&config)
        );

        // Create observability components
        let logger: Arc<dyn Logger> = self.logger.unwrap_or_else(|| {
            Arc::new(StructuredLogger::new("summarizer").with_level(config.log_level))
        });

        let tracer: Arc<dyn Tracer> = self.tracer
            .unwrap_or_else(|| Arc::new(TracingTracer::new("summarizer")));

        let recorder = self.metrics_recorder
            .unwrap_or_else(|| Box::new(TracingMetricsRecorder::new()));
        let metrics = Arc::new(SummarizerMetrics::new("summarizer", recorder));

        // Log initialization
        logger.info(
            "Summarizer client initialized",
            serde_json::json!({
                "base_url": config.base_url.as_str(),
                "api_version": config.api_version,
                "model": config.model,
                "oneshot_model": config.oneshot_model,
                "auth_method": format!("{:?}", config.auth_method),
            })
        );

        SummarizerClientImpl::from_parts(
            config,
            transport,
            auth_manager,
            logger,
            tracer,
            metrics,
        )
    }
}

impl Default for SummarizerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
