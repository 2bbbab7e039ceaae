//! Content-related types for the Generative Language API.
//!
//! This module contains types for representing prompt and candidate content.

use serde::{Deserialize, Serialize};

/// A part of a content message.
///
/// The API can return parts that carry no text at all (inline data,
/// function calls, safety placeholders). Those deserialize with `text`
/// set to `None` and are skipped by consumers looking for text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    /// The text content, if this part carries any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()) }
    }
}

/// A content message with an optional role and its parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// The role of the content author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts of the content. Missing on blocked or empty candidates.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create user-facing content from a single text prompt.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// The role of a message author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,
    /// Model role.
    Model,
    /// System role.
    System,
}
