//! Streaming support for summary responses.
//!
//! The streaming endpoint returns a JSON array with one response
//! object per line:
//! ```json
//! [{"candidates":[...],"usageMetadata":...},
//! {"candidates":[...],"usageMetadata":...}]
//! ```
//!
//! Two layers handle this format:
//! - [`ChunkExtractor`] does the incremental parsing: array brackets
//!   and comma separators, partial objects buffered across fragments,
//!   brace matching that ignores braces inside strings, and text
//!   extraction from each complete object.
//! - [`SummaryStream`] wraps a transport byte stream and drives the
//!   extractor lazily, yielding text fragments as a
//!   `futures::Stream`.

mod extractor;
mod fragments;

pub use extractor::ChunkExtractor;
pub use fragments::SummaryStream;
