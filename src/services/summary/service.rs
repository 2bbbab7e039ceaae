//! Summary service implementation for chunked, streamed transcript summarization.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use serde_json::json;

use super::validation::{validate_snippet_text, validate_transcript_chunks};
use super::{prompts, ChunkOutcome, FragmentStream, SummaryMode, SummaryService};
use crate::auth::AuthManager;
use crate::chunker::chunk_text;
use crate::config::SummarizerConfig;
use crate::error::{NetworkError, SummarizerError, SummarizerResult, SummaryError};
use crate::observability::{Logger, SpanStatus, SummarizerMetrics, Tracer};
use crate::streaming::SummaryStream;
use crate::transport::{
    endpoints, ChunkedStream, HttpMethod, HttpResponse, HttpTransport, RequestBuilder,
    ResponseParser, StreamingResponse,
};
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Implementation of the SummaryService.
pub struct SummaryServiceImpl {
    config: Arc<SummarizerConfig>,
    transport: Arc<dyn HttpTransport>,
    request_builder: RequestBuilder,
    logger: Arc<dyn Logger>,
    tracer: Arc<dyn Tracer>,
    metrics: Arc<SummarizerMetrics>,
}

impl SummaryServiceImpl {
    /// Create a new summary service implementation.
    pub fn new(
        config: Arc<SummarizerConfig>,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        logger: Arc<dyn Logger>,
        tracer: Arc<dyn Tracer>,
        metrics: Arc<SummarizerMetrics>,
    ) -> Self {
        // Clone the auth_manager for the request builder
        let request_builder = RequestBuilder::new(
            config.base_url.clone(),
            config.api_version.clone(),
            auth_manager.clone_box(),
        );

        Self {
            config,
            transport,
            request_builder,
            logger,
            tracer,
            metrics,
        }
    }

    /// Open the streaming endpoint for a prompt.
    ///
    /// Returns the HTTP status alongside the fragment stream so callers can
    /// record request metrics once the stream has drained.
    async fn open_stream(&self, prompt: &str) -> SummarizerResult<(u16, FragmentStream)> {
        let model = &self.config.model;

        // 1. Build the wire request
        let request = GenerateContentRequest::from_prompt(prompt);

        // 2. Build endpoint path (stream endpoint)
        let path = endpoints::stream_generate_content(model);

        // 3. Build HTTP request
        let http_request = self.request_builder.build_streaming_request(&path, &request)?;

        // 4. Execute streaming HTTP request
        let response = self
            .transport
            .send_streaming(http_request)
            .await
            .map_err(|e| {
                let error = SummarizerError::Network(NetworkError::ConnectionFailed {
                    message: e.to_string(),
                });

                self.logger.error("Network error opening summary stream", json!({
                    "error": error.to_string(),
                    "model": model,
                }));

                error
            })?;

        let StreamingResponse {
            status,
            headers,
            body,
        } = response;

        // 5. Reject non-2xx before exposing the stream; the error body must
        //    be drained to recover the server's message
        if status < 200 || status >= 300 {
            let collected = collect_body(body).await;
            let error = ResponseParser::parse_error_response(HttpResponse {
                status,
                headers,
                body: collected,
            });

            self.logger.error("Summary stream request rejected", json!({
                "status": status,
                "error": error.to_string(),
                "model": model,
            }));

            return Err(error);
        }

        // 6. Adapt the byte stream into a fragment stream
        Ok((status, Box::pin(SummaryStream::new(body))))
    }

    /// Run one streaming summarization request, forwarding every fragment to
    /// the callback and returning the accumulated text.
    async fn summarize_prompt(
        &self,
        prompt: &str,
        method: &str,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String> {
        let start = Instant::now();

        self.logger.debug("Issuing streaming summarization request", json!({
            "model": self.config.model,
            "method": method,
            "prompt_len": prompt.chars().count(),
        }));

        let (status, mut fragments) = self.open_stream(prompt).await?;

        let mut accumulated = String::new();
        let mut fragment_count = 0usize;

        while let Some(fragment) = fragments.next().await {
            let fragment = fragment?;

            self.metrics.record_stream_chunk("summary", fragment.len());
            fragment_count += 1;

            accumulated.push_str(&fragment);
            on_fragment(&fragment);
        }

        let duration = start.elapsed();
        self.metrics
            .record_request("summary", method, status, duration.as_millis() as u64);

        self.logger.debug("Streaming summarization request completed", json!({
            "method": method,
            "fragment_count": fragment_count,
            "accumulated_len": accumulated.len(),
            "duration_ms": duration.as_millis(),
        }));

        Ok(accumulated)
    }
}

#[async_trait]
impl SummaryService for SummaryServiceImpl {
    async fn summarize_transcript(
        &self,
        chunks: &[String],
        mode: SummaryMode,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String> {
        // Start tracing span
        let mut span = self.tracer.start_span("summarizer.summary.summarize_transcript");
        span.set_attribute("model", &self.config.model);
        span.set_attribute("service", "summary");
        span.set_attribute("method", "summarize_transcript");
        span.set_attribute("mode", &mode.to_string());

        let start = Instant::now();

        // Log request start
        self.logger.debug("Starting transcript summarization", json!({
            "model": self.config.model,
            "mode": mode.to_string(),
            "chunk_count": chunks.len(),
        }));

        // 1. Validate chunks
        if let Err(e) = validate_transcript_chunks(chunks) {
            span.set_status(SpanStatus::Error(e.to_string()));
            span.end();
            return Err(e);
        }

        self.metrics.record_transcript_chunks("summary", chunks.len());

        // 2. Single chunk: summarize directly, no consolidation pass
        if chunks.len() == 1 {
            let prompt = prompts::request_text(mode.instruction(), &chunks[0]);
            let result = self.summarize_prompt(&prompt, "generate", on_fragment).await;

            let duration = start.elapsed();
            match &result {
                Ok(summary) => {
                    self.logger.info("Transcript summarization completed", json!({
                        "model": self.config.model,
                        "mode": mode.to_string(),
                        "chunk_count": 1,
                        "summary_len": summary.len(),
                        "duration_ms": duration.as_millis(),
                    }));
                    span.set_status(SpanStatus::Ok);
                }
                Err(e) => {
                    span.set_status(SpanStatus::Error(e.to_string()));
                }
            }
            span.end();

            return result;
        }

        // 3. Summarize each chunk in order, tolerating individual failures.
        //    Requests are strictly sequential so fragment callbacks arrive
        //    in chunk order, never interleaved.
        let total = chunks.len();
        let mut outcomes: Vec<ChunkOutcome> = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            let prompt = prompts::request_text(
                &prompts::partial_prompt(index + 1, total, mode),
                chunk,
            );

            match self.summarize_prompt(&prompt, "generate_partial", on_fragment).await {
                Ok(text) => {
                    outcomes.push(ChunkOutcome::Summarized { index, text });
                }
                Err(error) => {
                    self.logger.warn("Chunk summarization failed", json!({
                        "chunk_index": index,
                        "chunk_count": total,
                        "error": error.to_string(),
                    }));
                    self.metrics.record_chunk_failure("summary");

                    outcomes.push(ChunkOutcome::Failed { index, error });
                }
            }
        }

        // 4. Collect partial summaries in chunk order
        let partials: Vec<&str> = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ChunkOutcome::Summarized { text, .. } => Some(text.as_str()),
                ChunkOutcome::Failed { .. } => None,
            })
            .collect();

        if partials.is_empty() {
            let error = SummarizerError::Summary(SummaryError::NoPartialSummaries);

            self.logger.error("All chunk summarizations failed", json!({
                "model": self.config.model,
                "chunk_count": total,
            }));

            span.set_status(SpanStatus::Error(error.to_string()));
            span.end();

            return Err(error);
        }

        // 5. Consolidate the partial summaries into the final summary
        let combined = partials.join("\n\n");
        let prompt = prompts::request_text(&prompts::consolidation_prompt(mode), &combined);

        let result = self.summarize_prompt(&prompt, "consolidate", on_fragment).await;

        let duration = start.elapsed();
        match &result {
            Ok(summary) => {
                self.logger.info("Transcript summarization completed", json!({
                    "model": self.config.model,
                    "mode": mode.to_string(),
                    "chunk_count": total,
                    "failed_chunks": total - partials.len(),
                    "summary_len": summary.len(),
                    "duration_ms": duration.as_millis(),
                }));
                span.set_status(SpanStatus::Ok);
            }
            Err(e) => {
                self.logger.error("Final consolidation failed", json!({
                    "error": e.to_string(),
                    "chunk_count": total,
                }));
                span.set_status(SpanStatus::Error(e.to_string()));
            }
        }
        span.end();

        result
    }

    async fn summarize_text(
        &self,
        text: &str,
        mode: SummaryMode,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String> {
        // Chunk with the configured maximum size, then orchestrate
        let chunks = chunk_text(text, self.config.max_chunk_size);

        self.logger.debug("Chunked input text", json!({
            "text_len": text.chars().count(),
            "max_chunk_size": self.config.max_chunk_size,
            "chunk_count": chunks.len(),
        }));

        self.summarize_transcript(&chunks, mode, on_fragment).await
    }

    async fn summarize_snippet(
        &self,
        text: &str,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> SummarizerResult<String> {
        // Start tracing span
        let mut span = self.tracer.start_span("summarizer.summary.summarize_snippet");
        span.set_attribute("model", &self.config.model);
        span.set_attribute("service", "summary");
        span.set_attribute("method", "snippet");

        // Log request start
        self.logger.debug("Starting snippet summarization", json!({
            "model": self.config.model,
            "text_len": text.chars().count(),
        }));

        // 1. Validate input
        if let Err(e) = validate_snippet_text(text) {
            span.set_status(SpanStatus::Error(e.to_string()));
            span.end();
            return Err(e);
        }

        // 2. Stream the fixed snippet prompt
        let prompt = prompts::snippet_prompt(text);
        let result = self.summarize_prompt(&prompt, "snippet", on_fragment).await;

        match &result {
            Ok(_) => span.set_status(SpanStatus::Ok),
            Err(e) => span.set_status(SpanStatus::Error(e.to_string())),
        }
        span.end();

        result
    }

    async fn summarize_snippet_once(&self, text: &str) -> SummarizerResult<String> {
        let model = &self.config.oneshot_model;

        // Start tracing span
        let mut span = self.tracer.start_span("summarizer.summary.summarize_snippet_once");
        span.set_attribute("model", model);
        span.set_attribute("service", "summary");
        span.set_attribute("method", "snippet_once");

        let start = Instant::now();

        // Log request start
        self.logger.debug("Starting one-shot snippet summarization", json!({
            "model": model,
            "text_len": text.chars().count(),
        }));

        // 1. Validate input
        if let Err(e) = validate_snippet_text(text) {
            span.set_status(SpanStatus::Error(e.to_string()));
            span.end();
            return Err(e);
        }

        // 2. Build the wire request
        let request = GenerateContentRequest::from_prompt(&prompts::snippet_prompt(text));

        // 3. Build endpoint path (one-shot endpoint)
        let path = endpoints::generate_content(model);

        // 4. Build HTTP request
        let http_request = self.request_builder.build_request(
            HttpMethod::Post,
            &path,
            Some(&request),
            None,
        )?;

        // 5. Execute HTTP request
        let http_response = match self.transport.send(http_request).await {
            Ok(response) => response,
            Err(e) => {
                let error = SummarizerError::Network(NetworkError::ConnectionFailed {
                    message: e.to_string(),
                });

                self.logger.error("Network error during one-shot summarization", json!({
                    "error": error.to_string(),
                    "model": model,
                }));

                span.set_status(SpanStatus::Error(error.to_string()));
                span.end();

                return Err(error);
            }
        };

        let status_code = http_response.status;

        // 6. Parse response
        let response: GenerateContentResponse = match ResponseParser::parse_response(http_response)
        {
            Ok(response) => response,
            Err(e) => {
                self.logger.error("One-shot summarization request failed", json!({
                    "status": status_code,
                    "error": e.to_string(),
                    "model": model,
                }));

                span.set_status(SpanStatus::Error(e.to_string()));
                span.end();

                return Err(e);
            }
        };

        let duration = start.elapsed();

        // 7. Record metrics and log usage
        self.metrics.record_request(
            "summary",
            "snippet_once",
            status_code,
            duration.as_millis() as u64,
        );

        if let Some(usage) = &response.usage_metadata {
            self.metrics.record_tokens(
                "summary",
                usage.prompt_token_count,
                usage.candidates_token_count.unwrap_or(0),
            );
        }

        // 8. Extract the summary text
        match response.primary_text() {
            Some(summary) => {
                self.logger.info("One-shot snippet summarization completed", json!({
                    "model": model,
                    "summary_len": summary.len(),
                    "duration_ms": duration.as_millis(),
                }));

                span.set_status(SpanStatus::Ok);
                span.end();

                Ok(summary.to_string())
            }
            None => {
                let block_reason = response
                    .prompt_feedback
                    .as_ref()
                    .and_then(|feedback| feedback.block_reason.as_ref());

                if let Some(reason) = block_reason {
                    self.metrics
                        .record_safety_block("summary", &format!("{:?}", reason));
                }

                let error = SummarizerError::Summary(SummaryError::NoSummaryGenerated);

                self.logger.warn("One-shot summarization returned no text", json!({
                    "model": model,
                    "block_reason": block_reason.map(|reason| format!("{:?}", reason)),
                    "duration_ms": duration.as_millis(),
                }));

                span.set_status(SpanStatus::Error(error.to_string()));
                span.end();

                Err(error)
            }
        }
    }

    async fn stream_fragments(&self, prompt: &str) -> SummarizerResult<FragmentStream> {
        // Start tracing span
        let mut span = self.tracer.start_span("summarizer.summary.stream_fragments");
        span.set_attribute("model", &self.config.model);
        span.set_attribute("service", "summary");
        span.set_attribute("method", "stream_fragments");

        // Log request start
        self.logger.debug("Opening raw fragment stream", json!({
            "model": self.config.model,
            "prompt_len": prompt.chars().count(),
        }));

        match self.open_stream(prompt).await {
            Ok((status, stream)) => {
                self.logger.info("Fragment stream opened", json!({
                    "model": self.config.model,
                    "status": status,
                }));

                span.set_status(SpanStatus::Ok);
                span.end();

                Ok(stream)
            }
            Err(e) => {
                span.set_status(SpanStatus::Error(e.to_string()));
                span.end();

                Err(e)
            }
        }
    }
}

/// Drain a rejected response body so the error envelope can be parsed.
async fn collect_body(mut stream: ChunkedStream) -> Bytes {
    let mut collected = Vec::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => collected.extend_from_slice(&bytes),
            Err(_) => break,
        }
    }

    Bytes::from(collected)
}
