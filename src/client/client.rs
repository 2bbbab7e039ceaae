//! Main client implementation for the summarizer.

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::SummarizerConfig;
use crate::error::SummarizerError;
use crate::observability::{Logger, SummarizerMetrics, Tracer};
use crate::services::{SummaryService, SummaryServiceImpl};
use crate::transport::HttpTransport;

use super::builder::SummarizerClientBuilder;
use super::traits::SummarizerClient;

/// Implementation of the summarizer client.
///
/// The summary service is lazily initialized on first access and reused
/// for the lifetime of the client.
///
/// # Example
///
/// ```no_run
/// use transcript_summarizer::{SummarizerClient, SummarizerClientImpl, SummaryMode};
/// use secrecy::SecretString;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SummarizerClientImpl::builder()
///     .api_key(SecretString::new("your-api-key".into()))
///     .build()?;
///
/// let chunks = vec!["First part of the transcript.".to_string()];
/// let summary = client
///     .summary()
///     .summarize_transcript(&chunks, SummaryMode::Bullets, &mut |_fragment| {})
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SummarizerClientImpl {
    config: Arc<SummarizerConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,

    // Lazy-initialized service
    summary_service: OnceCell<SummaryServiceImpl>,

    // Observability
    logger: Arc<dyn Logger>,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<SummarizerMetrics>,
}

impl SummarizerClientImpl {
    /// Creates a new client builder.
    pub fn builder() -> SummarizerClientBuilder {
        SummarizerClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// Reads configuration from:
    /// - `GEMINI_API_KEY` or `GOOGLE_API_KEY` (required)
    /// - `GEMINI_BASE_URL` (optional)
    /// - `GEMINI_API_VERSION` (optional)
    /// - `GEMINI_MODEL` (optional)
    /// - `GEMINI_TIMEOUT_SECS` (optional)
    pub fn from_env() -> Result<Self, SummarizerError> {
        let config = SummarizerConfig::from_env()?;
        Self::new(config)
    }

    /// Creates a client from a configuration object.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizerError> {
        SummarizerClientBuilder::from_config(config).build()
    }

    /// Creates a client from pre-constructed parts (used by builder).
    pub(super) fn from_parts(
        config: SummarizerConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        logger: Arc<dyn Logger>,
        tracer: Arc<dyn Tracer>,
        metrics: Arc<SummarizerMetrics>,
    ) -> Result<Self, SummarizerError> {
        Ok(Self {
            config: Arc::new(config),
            transport,
            auth_manager,
            summary_service: OnceCell::new(),
            logger,
            tracer,
            metrics,
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }
}

impl SummarizerClient for SummarizerClientImpl {
    fn summary(&self) -> &dyn SummaryService {
        self.summary_service.get_or_init(|| {
            SummaryServiceImpl::new(
                Arc::clone(&self.config),
                Arc::clone(&self.transport),
                Arc::clone(&self.auth_manager),
                Arc::clone(&self.logger),
                Arc::clone(&self.tracer),
                Arc::clone(&self.metrics),
            )
        })
    }
}

impl std::fmt::Debug for SummarizerClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerClientImpl")
            .field("config", &"<redacted>")
            .finish()
    }
}

/// Create a client from configuration.
pub fn create_client(
    config: SummarizerConfig,
) -> Result<Arc<dyn SummarizerClient>, SummarizerError> {
    let client = SummarizerClientImpl::new(config)?;
    Ok(Arc::new(client))
}

/// Create a client from environment variables.
pub fn create_client_from_env() -> Result<Arc<dyn SummarizerClient>, SummarizerError> {
    let config = SummarizerConfig::from_env()?;
    create_client(config)
}
