//! Client trait definitions for the summarizer.

use std::sync::Arc;

use crate::config::SummarizerConfig;
use crate::error::SummarizerError;
use crate::services::SummaryService;

/// Main client for the transcript summarizer.
pub trait SummarizerClient: Send + Sync {
    /// Access the summary service.
    fn summary(&self) -> &dyn SummaryService;
}

/// Factory for creating summarizer clients.
pub trait SummarizerClientFactory: Send + Sync {
    /// Create a new client with the given configuration.
    fn create(
        &self,
        config: SummarizerConfig,
    ) -> Result<Arc<dyn SummarizerClient>, SummarizerError>;
}
