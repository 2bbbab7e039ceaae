//! Metrics recording implementation for the transcript summarizer.
//!
//! Provides trait-based metrics recording with support for counters, histograms, and gauges.

use std::collections::HashMap;

/// Metrics recorder trait.
///
/// This trait provides methods for recording various types of metrics
/// (counters, histograms, gauges) with optional labels.
pub trait MetricsRecorder: Send + Sync {
    /// Increment a counter metric.
    ///
    /// # Arguments
    /// * `name` - The metric name
    /// * `labels` - Optional labels as key-value pairs
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]);

    /// Record a histogram value.
    ///
    /// Histograms track distributions of values (e.g., request durations, token counts).
    ///
    /// # Arguments
    /// * `name` - The metric name
    /// * `value` - The value to record
    /// * `labels` - Optional labels as key-value pairs
    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]);

    /// Record a gauge value.
    ///
    /// Gauges represent point-in-time values that can go up or down.
    ///
    /// # Arguments
    /// * `name` - The metric name
    /// * `value` - The current value
    /// * `labels` - Optional labels as key-value pairs
    fn record_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]);
}

/// Summarizer-specific metrics recorder with convenience methods.
///
/// This wrapper provides high-level methods for recording common summarization metrics.
pub struct SummarizerMetrics {
    prefix: String,
    recorder: Box<dyn MetricsRecorder>,
}

impl SummarizerMetrics {
    /// Create a new summarizer metrics recorder.
    ///
    /// # Arguments
    /// * `prefix` - Metric name prefix (e.g., "summarizer")
    /// * `recorder` - The underlying metrics recorder implementation
    pub fn new(prefix: &str, recorder: Box<dyn MetricsRecorder>) -> Self {
        Self {
            prefix: prefix.to_string(),
            recorder,
        }
    }

    /// Record a complete API request with status and duration.
    ///
    /// This convenience method records both a counter and histogram for the request.
    ///
    /// # Arguments
    /// * `service` - The service name (e.g., "summary")
    /// * `method` - The method name (e.g., "generate", "consolidate")
    /// * `status` - The HTTP status code
    /// * `duration_ms` - The request duration in milliseconds
    pub fn record_request(&self, service: &str, method: &str, status: u16, duration_ms: u64) {
        let status_str = status.to_string();

        // Increment request counter
        self.recorder.increment_counter(
            &format!("{}_requests_total", self.prefix),
            &[
                ("service", service),
                ("method", method),
                ("status", &status_str),
            ],
        );

        // Record request duration
        self.recorder.record_histogram(
            &format!("{}_request_duration_ms", self.prefix),
            duration_ms as f64,
            &[("service", service), ("method", method)],
        );

        // Track error rate separately
        if status >= 400 {
            self.recorder.increment_counter(
                &format!("{}_errors_total", self.prefix),
                &[
                    ("service", service),
                    ("method", method),
                    ("status", &status_str),
                ],
            );
        }
    }

    /// Record token usage for a request.
    ///
    /// # Arguments
    /// * `service` - The service name
    /// * `prompt_tokens` - Number of tokens in the prompt
    /// * `completion_tokens` - Number of tokens in the completion
    pub fn record_tokens(&self, service: &str, prompt_tokens: i32, completion_tokens: i32) {
        self.recorder.record_histogram(
            &format!("{}_prompt_tokens", self.prefix),
            prompt_tokens as f64,
            &[("service", service)],
        );

        self.recorder.record_histogram(
            &format!("{}_completion_tokens", self.prefix),
            completion_tokens as f64,
            &[("service", service)],
        );

        let total_tokens = prompt_tokens + completion_tokens;
        self.recorder.record_histogram(
            &format!("{}_total_tokens", self.prefix),
            total_tokens as f64,
            &[("service", service)],
        );
    }

    /// Record a streaming chunk received.
    ///
    /// # Arguments
    /// * `service` - The service name
    /// * `chunk_size` - Size of the chunk in bytes
    pub fn record_stream_chunk(&self, service: &str, chunk_size: usize) {
        self.recorder.increment_counter(
            &format!("{}_stream_chunks_total", self.prefix),
            &[("service", service)],
        );

        self.recorder.record_histogram(
            &format!("{}_stream_chunk_size_bytes", self.prefix),
            chunk_size as f64,
            &[("service", service)],
        );
    }

    /// Record the number of transcript chunks submitted for summarization.
    ///
    /// # Arguments
    /// * `service` - The service name
    /// * `chunk_count` - Number of chunks the transcript was split into
    pub fn record_transcript_chunks(&self, service: &str, chunk_count: usize) {
        self.recorder.record_histogram(
            &format!("{}_transcript_chunks", self.prefix),
            chunk_count as f64,
            &[("service", service)],
        );
    }

    /// Record a failed partial summary for one transcript chunk.
    ///
    /// # Arguments
    /// * `service` - The service name
    pub fn record_chunk_failure(&self, service: &str) {
        self.recorder.increment_counter(
            &format!("{}_chunk_failures_total", self.prefix),
            &[("service", service)],
        );
    }

    /// Record a safety block event.
    ///
    /// # Arguments
    /// * `service` - The service name
    /// * `reason` - The block reason reported by the API
    pub fn record_safety_block(&self, service: &str, reason: &str) {
        self.recorder.increment_counter(
            &format!("{}_safety_blocks_total", self.prefix),
            &[("service", service), ("reason", reason)],
        );
    }
}

/// Tracing-based metrics recorder implementation.
///
/// This recorder emits metrics as tracing events, which can be consumed
/// by various tracing subscribers.
pub struct TracingMetricsRecorder;

impl TracingMetricsRecorder {
    /// Create a new tracing metrics recorder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingMetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder for TracingMetricsRecorder {
    fn increment_counter(&self, name: &str, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "counter",
            metric_name = name,
            metric_value = 1,
            labels = ?labels_map,
            "Counter incremented"
        );
    }

    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "histogram",
            metric_name = name,
            metric_value = value,
            labels = ?labels_map,
            "Histogram recorded"
        );
    }

    fn record_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let labels_map: HashMap<&str, &str> = labels.iter().copied().collect();
        tracing::info!(
            metric_type = "gauge",
            metric_name = name,
            metric_value = value,
            labels = ?labels_map,
            "Gauge recorded"
        );
    }
}

/// Default metrics recorder implementation (no-op).
///
/// This recorder is suitable for environments where metrics are disabled.
pub struct DefaultMetricsRecorder {
    _prefix: String,
}

impl DefaultMetricsRecorder {
    /// Creates a new default metrics recorder.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            _prefix: prefix.into(),
        }
    }
}

impl MetricsRecorder for DefaultMetricsRecorder {
    fn increment_counter(&self, _name: &str, _labels: &[(&str, &str)]) {
        // No-op
    }

    fn record_histogram(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {
        // No-op
    }

    fn record_gauge(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {
        // No-op
    }
}
