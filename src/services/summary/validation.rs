//! Validation functions for summarization requests.

use crate::error::{RequestError, SummarizerError, SummarizerResult, SummaryError, ValidationDetail};

/// Validate a transcript chunk list before orchestration.
///
/// An empty list is the dedicated `EmptyTranscript` failure; blank chunks
/// inside a non-empty list are reported as field-level validation errors.
pub fn validate_transcript_chunks(chunks: &[String]) -> SummarizerResult<()> {
    if chunks.is_empty() {
        return Err(SummarizerError::Summary(SummaryError::EmptyTranscript));
    }

    let mut details = Vec::new();

    for (idx, chunk) in chunks.iter().enumerate() {
        if chunk.trim().is_empty() {
            details.push(ValidationDetail {
                field: format!("chunks[{}]", idx),
                description: "Chunk text cannot be empty".to_string(),
            });
        }
    }

    if !details.is_empty() {
        return Err(SummarizerError::Request(RequestError::ValidationError {
            message: "Invalid transcript chunks".to_string(),
            details,
        }));
    }

    Ok(())
}

/// Validate snippet text before a quick-summary request.
pub fn validate_snippet_text(text: &str) -> SummarizerResult<()> {
    let mut details = Vec::new();

    if text.trim().is_empty() {
        details.push(ValidationDetail {
            field: "text".to_string(),
            description: "Snippet text cannot be empty".to_string(),
        });
    }

    if !details.is_empty() {
        return Err(SummarizerError::Request(RequestError::ValidationError {
            message: "Invalid snippet text".to_string(),
            details,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_chunks_valid() {
        let chunks = vec!["First part.".to_string(), "Second part.".to_string()];
        assert!(validate_transcript_chunks(&chunks).is_ok());
    }

    #[test]
    fn test_validate_chunks_empty_list() {
        let error = validate_transcript_chunks(&[]).unwrap_err();
        assert!(matches!(
            error,
            SummarizerError::Summary(SummaryError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_validate_chunks_blank_chunk() {
        let chunks = vec!["First part.".to_string(), "   ".to_string()];
        let error = validate_transcript_chunks(&chunks).unwrap_err();

        match error {
            SummarizerError::Request(RequestError::ValidationError { details, .. }) => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "chunks[1]");
            }
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_validate_snippet_text_valid() {
        assert!(validate_snippet_text("A selection worth summarizing.").is_ok());
    }

    #[test]
    fn test_validate_snippet_text_blank() {
        let error = validate_snippet_text("  \n ").unwrap_err();
        assert!(matches!(
            error,
            SummarizerError::Request(RequestError::ValidationError { .. })
        ));
    }
}
