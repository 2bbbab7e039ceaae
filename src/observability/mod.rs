//! Observability layer for the transcript summarizer.
//!
//! Provides comprehensive observability through logging, tracing, and metrics.
//!
//! # Overview
//!
//! This module provides trait-based abstractions for:
//! - **Logging**: Structured logging with sensitive data redaction
//! - **Tracing**: Distributed tracing with spans and attributes
//! - **Metrics**: Metrics recording (counters, histograms, gauges)
//!
//! # Examples
//!
//! ## Using the Structured Logger
//!
//! ```rust
//! use transcript_summarizer::observability::{Logger, StructuredLogger};
//! use transcript_summarizer::config::LogLevel;
//! use serde_json::json;
//!
//! let logger = StructuredLogger::new("summarizer.summary")
//!     .with_level(LogLevel::Debug);
//!
//! logger.info("Starting transcript summarization", json!({
//!     "model": "gemini-2.5-flash",
//!     "chunk_count": 3
//! }));
//! ```
//!
//! ## Using the Tracer
//!
//! ```rust
//! use transcript_summarizer::observability::{Tracer, TracingTracer, SpanStatus};
//!
//! let tracer = TracingTracer::new("summarizer");
//! let mut span = tracer.start_span("summary.generate");
//!
//! span.set_attribute("model", "gemini-2.5-flash");
//! span.set_status(SpanStatus::Ok);
//! span.end();
//! ```
//!
//! ## Using Metrics
//!
//! ```rust
//! use transcript_summarizer::observability::{SummarizerMetrics, TracingMetricsRecorder};
//!
//! let recorder = Box::new(TracingMetricsRecorder::new());
//! let metrics = SummarizerMetrics::new("summarizer", recorder);
//!
//! metrics.record_request("summary", "generate", 200, 1234);
//! metrics.record_tokens("summary", 100, 50);
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;

use std::sync::Arc;

// Re-export main types for convenience
pub use logging::{DefaultLogger, Logger, StructuredLogger};
pub use metrics::{
    DefaultMetricsRecorder, MetricsRecorder, SummarizerMetrics, TracingMetricsRecorder,
};
pub use tracing::{DefaultTracer, Span, SpanStatus, Tracer, TracingSpan, TracingTracer};

/// Create a default observability stack.
///
/// Returns a tuple of (logger, tracer, metrics) with default implementations.
///
/// # Arguments
/// * `service_name` - The service name to use for all observability components
///
/// # Example
/// ```rust
/// use transcript_summarizer::observability::create_default_stack;
///
/// let (logger, tracer, metrics) = create_default_stack("summarizer");
/// ```
pub fn create_default_stack(
    service_name: &str,
) -> (
    Arc<dyn Logger>,
    Arc<dyn Tracer>,
    Arc<SummarizerMetrics>,
) {
    let logger = Arc::new(StructuredLogger::new(service_name));
    let tracer = Arc::new(TracingTracer::new(service_name));
    let metrics_recorder = Box::new(TracingMetricsRecorder::new());
    let metrics = Arc::new(SummarizerMetrics::new(service_name, metrics_recorder));

    (logger, tracer, metrics)
}

/// Create a no-op observability stack.
///
/// Returns a tuple of (logger, tracer, metrics) with no-op implementations
/// suitable for testing or when observability is disabled.
///
/// # Arguments
/// * `service_name` - The service name (used for naming only)
///
/// # Example
/// ```rust
/// use transcript_summarizer::observability::create_noop_stack;
///
/// let (logger, tracer, metrics) = create_noop_stack("summarizer");
/// ```
pub fn create_noop_stack(
    service_name: &str,
) -> (
    Arc<dyn Logger>,
    Arc<dyn Tracer>,
    Arc<SummarizerMetrics>,
) {
    let logger = Arc::new(DefaultLogger::new(service_name));
    let tracer = Arc::new(DefaultTracer::new(service_name));
    let metrics_recorder = Box::new(DefaultMetricsRecorder::new(service_name));
    let metrics = Arc::new(SummarizerMetrics::new(service_name, metrics_recorder));

    (logger, tracer, metrics)
}
