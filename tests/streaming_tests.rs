//! Integration tests for the streaming fragment parser.

use bytes::Bytes;
use futures::stream;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use transcript_summarizer::error::{ResponseError, SummarizerError};
use transcript_summarizer::streaming::{ChunkExtractor, SummaryStream};
use transcript_summarizer::transport::TransportError;

/// One streamed response object whose first candidate carries `text`.
fn response_json(text: &str) -> String {
    format!(
        r#"{{"candidates":[{{"content":{{"parts":[{{"text":"{}"}}],"role":"model"}}}}]}}"#,
        text
    )
}

/// A realistic streaming payload: four objects in an array, usage
/// metadata throughout, finish reason on the last.
fn realistic_payload() -> String {
    [
        r#"[{"candidates":[{"content":{"parts":[{"text":"The"}],"role":"model"}}],"usageMetadata":{"promptTokenCount":10,"candidatesTokenCount":1,"totalTokenCount":11}},"#,
        r#"{"candidates":[{"content":{"parts":[{"text":" video"}],"role":"model"}}],"usageMetadata":{"promptTokenCount":10,"candidatesTokenCount":3,"totalTokenCount":13}},"#,
        r#"{"candidates":[{"content":{"parts":[{"text":" explains"}],"role":"model"}}],"usageMetadata":{"promptTokenCount":10,"candidatesTokenCount":6,"totalTokenCount":16}},"#,
        r#"{"candidates":[{"content":{"parts":[{"text":" lifetimes."}],"role":"model"},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":10,"candidatesTokenCount":9,"totalTokenCount":19}}]"#,
    ]
    .concat()
}

fn stream_of(chunks: Vec<Result<Bytes, TransportError>>) -> SummaryStream {
    SummaryStream::new(Box::pin(stream::iter(chunks)))
}

async fn collect_fragments(mut stream: SummaryStream) -> Vec<String> {
    let mut fragments = Vec::new();
    while let Some(result) = stream.next().await {
        fragments.push(result.expect("stream should not fail"));
    }
    fragments
}

#[test]
fn test_extractor_is_split_invariant() {
    // Arrange
    let payload = format!(
        "[{},{},{}]",
        response_json("Rust enforces"),
        response_json(" mémory safety"),
        response_json(" at compile time.")
    );

    // Act - parse the same payload whole, char by char, and in threes
    let mut whole = ChunkExtractor::new();
    let all_at_once = whole.feed(&payload);

    let mut tiny = ChunkExtractor::new();
    let mut char_by_char = Vec::new();
    for c in payload.chars() {
        char_by_char.extend(tiny.feed(&c.to_string()));
    }

    let mut grouped = ChunkExtractor::new();
    let mut by_threes = Vec::new();
    let chars: Vec<char> = payload.chars().collect();
    for group in chars.chunks(3) {
        let piece: String = group.iter().collect();
        by_threes.extend(grouped.feed(&piece));
    }

    // Assert - fragment boundaries never change the output
    let expected = vec![
        "Rust enforces".to_string(),
        " mémory safety".to_string(),
        " at compile time.".to_string(),
    ];
    assert_eq!(all_at_once, expected);
    assert_eq!(char_by_char, expected);
    assert_eq!(by_threes, expected);
}

#[tokio::test]
async fn test_stream_yields_fragments_in_wire_order() {
    // Arrange
    let stream = stream_of(vec![Ok(Bytes::from(realistic_payload()))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["The", " video", " explains", " lifetimes."]);
}

#[tokio::test]
async fn test_stream_is_byte_split_invariant() {
    // Arrange - one byte per transport chunk, multibyte text included
    let payload = format!("[{}]", response_json("caffè → espresso"));
    let chunks: Vec<Result<Bytes, TransportError>> = payload
        .as_bytes()
        .iter()
        .map(|&b| Ok(Bytes::copy_from_slice(&[b])))
        .collect();
    let stream = stream_of(chunks);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["caffè → espresso"]);
}

#[tokio::test]
async fn test_stream_object_split_across_chunks() {
    // Arrange - the chunk boundary falls inside the object
    let payload = format!("[{}]", response_json("boundary test"));
    let cut = payload.len() / 3;
    let stream = stream_of(vec![
        Ok(Bytes::copy_from_slice(&payload.as_bytes()[..cut])),
        Ok(Bytes::copy_from_slice(&payload.as_bytes()[cut..])),
    ]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["boundary test"]);
}

#[tokio::test]
async fn test_textless_frames_are_skipped() {
    // Arrange - usage-only frame, then a blocked frame, then real text
    let payload = [
        r#"[{"usageMetadata":{"promptTokenCount":7,"totalTokenCount":7}},"#,
        r#"{"candidates":[{"finishReason":"SAFETY"}],"promptFeedback":{"blockReason":"SAFETY"}},"#,
        &response_json("actual content"),
        "]",
    ]
    .concat();
    let stream = stream_of(vec![Ok(Bytes::from(payload))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["actual content"]);
}

#[tokio::test]
async fn test_escaped_quotes_and_braces_in_text() {
    // Arrange
    let payload = format!(
        "[{},{}]",
        response_json(r#"he said \"ship it\""#),
        response_json("code: fn main() { }")
    );
    let stream = stream_of(vec![Ok(Bytes::from(payload))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(
        fragments,
        vec![r#"he said "ship it""#, "code: fn main() { }"]
    );
}

#[tokio::test]
async fn test_transport_error_surfaces_as_interruption() {
    // Arrange
    let opening = format!("[{},", response_json("before the cut"));
    let mut stream = stream_of(vec![
        Ok(Bytes::from(opening)),
        Err(TransportError::Request(
            "connection reset by peer".to_string(),
        )),
    ]);

    // Act
    let first = stream.next().await.unwrap();
    let second = stream.next().await.unwrap();
    let third = stream.next().await;

    // Assert
    assert_eq!(first.unwrap(), "before the cut");
    assert!(matches!(
        second.unwrap_err(),
        SummarizerError::Response(ResponseError::StreamInterrupted { .. })
    ));
    assert!(third.is_none());
}

#[tokio::test]
async fn test_unparsable_span_does_not_poison_stream() {
    // Arrange - a balanced span that is not a response object, then
    // two valid objects
    let payload = format!(
        r#"[{{"candidates":"not an array"}},{},{}]"#,
        response_json("first"),
        response_json("second")
    );
    let stream = stream_of(vec![Ok(Bytes::from(payload))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["first", "second"]);
}

#[tokio::test]
async fn test_never_closing_tail_is_dropped() {
    // Arrange - the final object never closes before the stream ends
    let complete = response_json("kept");
    let truncated_source = response_json("lost to the void");
    let truncated = &truncated_source[..truncated_source.len() - 6];
    let stream = stream_of(vec![Ok(Bytes::from(format!(
        "[{},{}",
        complete, truncated
    )))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert - the complete object is yielded, the tail is discarded
    assert_eq!(fragments, vec!["kept"]);
}

#[tokio::test]
async fn test_empty_stream_yields_nothing() {
    // Arrange
    let stream = stream_of(vec![]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert!(fragments.is_empty());
}

#[tokio::test]
async fn test_whitespace_between_objects_is_tolerated() {
    // Arrange
    let payload = format!(
        "  [ {} ,\r\n\t {} ]  ",
        response_json("one"),
        response_json("two")
    );
    let stream = stream_of(vec![Ok(Bytes::from(payload))]);

    // Act
    let fragments = collect_fragments(stream).await;

    // Assert
    assert_eq!(fragments, vec!["one", "two"]);
}
