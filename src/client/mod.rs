//! Client interface and factory for the summarizer.
//!
//! Provides the main `SummarizerClient` implementation with builder pattern,
//! a lazily-initialized summary service, and factory methods for client
//! creation.

mod builder;
mod client;
mod traits;

// Re-export public API
pub use builder::SummarizerClientBuilder;
pub use client::{create_client, create_client_from_env, SummarizerClientImpl};
pub use traits::{SummarizerClient, SummarizerClientFactory};
