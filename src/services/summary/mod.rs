//! Transcript summarization service.

mod prompts;
mod service;
mod validation;

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::error::{SummarizerError, SummarizerResult};

pub use prompts::SummaryMode;
pub use service::SummaryServiceImpl;

/// Type alias for the lazy fragment stream.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, SummarizerError>> + Send>>;

/// Outcome of summarizing one transcript chunk.
///
/// The orchestrator records one outcome per chunk, in chunk order, so that
/// partial failures stay visible instead of vanishing into a counter. The
/// partial-summary list and the all-chunks-failed condition are both derived
/// from the collected outcomes.
#[derive(Debug)]
pub enum ChunkOutcome {
    /// The chunk produced a partial summary.
    Summarized {
        /// Zero-based index of the chunk.
        index: usize,
        /// Accumulated partial summary text.
        text: String,
    },
    /// The chunk's summarization request failed.
    Failed {
        /// Zero-based index of the chunk.
        index: usize,
        /// The error that ended the request.
        error: SummarizerError,
    },
}

/// Service for chunked, streamed summarization of long texts.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Summarize pre-chunked transcript text into one cohesive summary.
    ///
    /// Chunks are summarized strictly in order; individual chunk failures
    /// are tolerated as long as at least one partial summary succeeds. The
    /// callback receives every streamed fragment, partial passes included;
    /// the returned string is the accumulated text of the final pass only.
    async fn summarize_transcript(
        &self,
        chunks: &[String],
        mode: SummaryMode,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String>;

    /// Chunk raw text with the configured maximum chunk size, then summarize.
    async fn summarize_text(
        &self,
        text: &str,
        mode: SummaryMode,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String>;

    /// Stream a quick bullet-point summary of a short snippet.
    async fn summarize_snippet(
        &self,
        text: &str,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String>;

    /// Summarize a short snippet in one non-streaming request against the
    /// one-shot model.
    async fn summarize_snippet_once(&self, text: &str) -> SummarizerResult<String>;

    /// Open the raw streaming summarization channel for a prompt.
    ///
    /// Callers wanting backpressure or stream composition consume this
    /// directly instead of supplying a callback.
    async fn stream_fragments(&self, prompt: &str) -> SummarizerResult<FragmentStream>;
}
