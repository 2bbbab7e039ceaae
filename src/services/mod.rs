//! Service implementations for the summarizer.

pub mod summary;

pub use summary::*;
