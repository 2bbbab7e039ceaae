//! Wire types for the Generative Language API.
//!
//! This module contains the request and response types exchanged with
//! the `generateContent` and `streamGenerateContent` endpoints.

// Module declarations
pub mod content;
pub mod generation;

// Re-exports for content types
pub use content::{Content, Part, Role};

// Re-exports for generation types
pub use generation::{
    BlockReason, Candidate, FinishReason, GenerateContentRequest, GenerateContentResponse,
    PromptFeedback, UsageMetadata,
};
