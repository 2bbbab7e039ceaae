//! # Transcript Summarizer Client
//!
//! Production-ready Rust client for summarizing YouTube transcripts and
//! long-form text with the Google Gemini (Generative AI) API.
//!
//! ## Features
//!
//! - Streaming summaries with incremental JSON array parsing
//! - Sentence-aware transcript chunking that never splits a sentence
//! - Per-chunk fault tolerance with a consolidation pass over the partials
//! - TL;DR, bullet-point, and detailed study-note summary modes
//! - One-shot snippet summaries on a lightweight model
//! - Comprehensive observability (tracing, logging, metrics)
//! - Secure credential handling with `SecretString`
//! - Type-safe request/response models
//! - London-School TDD with mock support
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use transcript_summarizer::{create_client, SummarizerClient, SummarizerConfig, SummaryMode};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from configuration
//!     let config = SummarizerConfig::builder()
//!         .api_key(SecretString::new("your-api-key".into()))
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     // Or create from environment variables
//!     // let client = create_client_from_env()?;
//!
//!     let chunks = vec![
//!         "Welcome back to the channel. Today we are covering ownership.".to_string(),
//!         "Borrowing lets you read data without taking ownership of it.".to_string(),
//!     ];
//!
//!     let summary = client
//!         .summary()
//!         .summarize_transcript(&chunks, SummaryMode::Bullets, &mut |fragment| {
//!             print!("{fragment}");
//!         })
//!         .await?;
//!
//!     println!("\n---\n{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Authentication and API key management
//! - `chunker` - Sentence-aware transcript chunking
//! - `transport` - HTTP transport layer and streaming
//! - `streaming` - Incremental parsing of streamed responses
//! - `error` - Error types and taxonomy
//! - `types` - Wire types (Content, Part, Candidate, etc.)
//! - `services` - The summary service implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(dead_code)] // Allow during initial development

// Public modules
pub mod auth;
pub mod chunker;
pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod services;
pub mod streaming;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod mocks;
pub mod fixtures;

// Re-exports for convenience
pub use auth::{ApiKeyAuthManager, AuthManager};
pub use chunker::chunk_text;
pub use client::{
    create_client, create_client_from_env,
    SummarizerClient, SummarizerClientFactory, SummarizerClientImpl, SummarizerClientBuilder
};
pub use config::{
    AuthMethod, LogLevel, SummarizerConfig, SummarizerConfigBuilder,
    DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MODEL, DEFAULT_ONESHOT_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use error::{
    // Main error types
    SummarizerError,
    SummarizerResult,
    // Error categories
    AuthenticationError,
    ConfigurationError,
    NetworkError,
    RateLimitError,
    RequestError,
    ResourceError,
    ResponseError,
    ServerError,
    SummaryError,
    ValidationDetail,
    // Error mapping utilities
    map_http_status_with_body,
};
pub use transport::{
    ChunkedStream, HttpMethod, HttpRequest, HttpResponse, HttpTransport, StreamingResponse,
    TransportError, RequestBuilder, ResponseParser,
};

// Type re-exports
pub use types::{
    // Content types
    Content, Part, Role,
    // Generation types
    BlockReason, Candidate, FinishReason, PromptFeedback, UsageMetadata,
    // Request/Response types
    GenerateContentRequest, GenerateContentResponse,
};

// Service re-exports
pub use services::{ChunkOutcome, FragmentStream, SummaryMode, SummaryService, SummaryServiceImpl};

// Streaming re-exports
pub use streaming::{ChunkExtractor, SummaryStream};

// Observability re-exports
pub use observability::{
    // Logging
    Logger, StructuredLogger, DefaultLogger,
    // Tracing
    Tracer, Span, SpanStatus, TracingTracer, TracingSpan, DefaultTracer,
    // Metrics
    MetricsRecorder, SummarizerMetrics, TracingMetricsRecorder, DefaultMetricsRecorder,
    // Factory functions
    create_default_stack, create_noop_stack,
};
