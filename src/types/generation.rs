//! Content generation types for the Generative Language API.
//!
//! This module contains the request and response shapes for the
//! `generateContent` and `streamGenerateContent` endpoints. Response
//! types are deliberately tolerant: fields the API may omit on blocked
//! or partial candidates are optional, and enums accept values added
//! to the API after this crate was written.

use serde::{Deserialize, Serialize};

use super::content::Content;

/// The reason why content generation finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Natural stop point.
    Stop,
    /// Maximum token limit reached.
    MaxTokens,
    /// Safety threshold triggered.
    Safety,
    /// Content recitation detected.
    Recitation,
    /// Any reason this crate does not know about (catch-all).
    #[serde(other)]
    Other,
}

/// Metadata about token usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: i32,
    /// Number of tokens in the candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens.
    #[serde(default)]
    pub total_token_count: i32,
}

/// A candidate response from the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate. Absent when generation was blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason generation finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
    /// The index of this candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
}

/// Request to generate content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The content to send to the model.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Create a request carrying a single text prompt.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content::from_text(prompt)],
        }
    }
}

/// Feedback on why the prompt was blocked or altered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// The reason the prompt was blocked, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<BlockReason>,
}

/// Reason why the prompt was blocked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockReason {
    /// Blocked due to safety.
    Safety,
    /// Blocked due to a blocklist entry.
    Blocklist,
    /// Blocked due to prohibited content.
    ProhibitedContent,
    /// Blocked due to other reasons.
    Other,
    /// Unspecified or unknown block reason (catch-all).
    #[serde(other)]
    Unspecified,
}

/// Response from content generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// The candidate responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    /// Feedback about the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Usage metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
    /// The version of the model used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// The text of the first part of the first candidate, if it is
    /// present and non-empty.
    pub fn primary_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello"}]}}]}"#,
        )
        .unwrap();

        assert_eq!(response.primary_text(), Some("Hello"));
    }

    #[test]
    fn test_primary_text_absent_when_blocked() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"finishReason":"SAFETY"}],"promptFeedback":{"blockReason":"SAFETY"}}"#,
        )
        .unwrap();

        assert_eq!(response.primary_text(), None);
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason,
            Some(BlockReason::Safety),
        );
    }

    #[test]
    fn test_textless_parts_deserialize() {
        // Parts carrying inline data instead of text must not fail the parse.
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"AA=="}}]}}]}"#,
        )
        .unwrap();

        assert_eq!(response.primary_text(), None);
    }

    #[test]
    fn test_unknown_finish_reason_tolerated() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]},"finishReason":"LANGUAGE"}]}"#,
        )
        .unwrap();

        let candidate = &response.candidates.as_ref().unwrap()[0];
        assert_eq!(candidate.finish_reason, Some(FinishReason::Other));
        assert_eq!(response.primary_text(), Some("ok"));
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateContentRequest::from_prompt("Summarize this.");
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"Summarize this."}]}]}"#);
    }
}
