//! Integration tests for the summary service orchestrator.

use bytes::Bytes;
use futures::StreamExt;
use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;

use transcript_summarizer::config::SummarizerConfig;
use transcript_summarizer::error::{
    NetworkError, RateLimitError, RequestError, SummarizerError, SummaryError,
};
use transcript_summarizer::fixtures::load_fixture;
use transcript_summarizer::mocks::{MockAuthManager, MockHttpTransport};
use transcript_summarizer::observability::create_noop_stack;
use transcript_summarizer::services::{SummaryMode, SummaryService, SummaryServiceImpl};
use transcript_summarizer::transport::{HttpMethod, HttpRequest, TransportError};

const SERVER_ERROR_BODY: &str =
    r#"{"error":{"code":500,"message":"Internal error encountered.","status":"INTERNAL"}}"#;

fn test_config() -> SummarizerConfig {
    SummarizerConfig::builder()
        .api_key(SecretString::new("test-api-key".into()))
        .build()
        .unwrap()
}

fn create_test_service(transport: Arc<MockHttpTransport>) -> SummaryServiceImpl {
    create_service_with_config(test_config(), transport)
}

fn create_service_with_config(
    config: SummarizerConfig,
    transport: Arc<MockHttpTransport>,
) -> SummaryServiceImpl {
    let (logger, tracer, metrics) = create_noop_stack("summarizer-test");

    SummaryServiceImpl::new(
        Arc::new(config),
        transport,
        Arc::new(MockAuthManager::new("test-api-key")),
        logger,
        tracer,
        metrics,
    )
}

/// One streamed response object carrying `text`.
fn response_object(text: &str) -> String {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}], "role": "model"}}
        ]
    })
    .to_string()
}

/// A full streaming body: the fragments as a JSON array in one chunk.
fn stream_body(fragments: &[&str]) -> Vec<Bytes> {
    let objects: Vec<String> = fragments.iter().map(|text| response_object(text)).collect();
    vec![Bytes::from(format!("[{}]", objects.join(",")))]
}

/// The prompt text inside a recorded generateContent request body.
fn request_text_of(request: &HttpRequest) -> String {
    let body = request.body.as_ref().expect("request should have a body");
    let value: serde_json::Value = serde_json::from_slice(body).unwrap();
    value["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("request body should carry prompt text")
        .to_string()
}

#[tokio::test]
async fn test_single_chunk_is_summarized_in_one_request() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["- Point one", "\n- Point two"]));
    let service = create_test_service(transport.clone());
    let chunks = vec!["A short transcript about Rust.".to_string()];

    let mut seen = Vec::new();
    let mut capture = |fragment: &str| seen.push(fragment.to_string());

    // Act
    let summary = service
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut capture)
        .await
        .unwrap();

    // Assert - one streaming request, no consolidation pass
    assert_eq!(summary, "- Point one\n- Point two");
    assert_eq!(seen, vec!["- Point one", "\n- Point two"]);
    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, ":streamGenerateContent");
    transport.verify_request(0, HttpMethod::Post, "gemini-2.5-flash");

    let requests = transport.get_requests();
    assert!(requests[0].url.contains("key=test-api-key"));
    let prompt = request_text_of(&requests[0]);
    assert!(prompt.starts_with("Summarize in 4-6 concise bullet points."));
    assert!(prompt.ends_with("Text: A short transcript about Rust."));
}

#[tokio::test]
async fn test_multi_chunk_runs_partials_then_consolidation() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["Alpha ", "covered."]));
    transport.enqueue_streaming_response(200, stream_body(&["Beta covered."]));
    transport.enqueue_streaming_response(200, stream_body(&["Gamma covered."]));
    transport.enqueue_streaming_response(200, stream_body(&["Final summary: ", "all good."]));
    let service = create_test_service(transport.clone());
    let chunks = vec![
        "First segment.".to_string(),
        "Second segment.".to_string(),
        "Third segment.".to_string(),
    ];

    let mut seen = Vec::new();
    let mut capture = |fragment: &str| seen.push(fragment.to_string());

    // Act
    let summary = service
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut capture)
        .await
        .unwrap();

    // Assert - the returned text is the final pass only, the callback
    // saw every fragment in chunk order
    assert_eq!(summary, "Final summary: all good.");
    assert_eq!(
        seen,
        vec![
            "Alpha ",
            "covered.",
            "Beta covered.",
            "Gamma covered.",
            "Final summary: ",
            "all good.",
        ]
    );
    transport.verify_request_count(4);

    let requests = transport.get_requests();
    assert!(request_text_of(&requests[0]).starts_with("This is part 1 of 3"));
    assert!(request_text_of(&requests[1]).starts_with("This is part 2 of 3"));
    assert!(request_text_of(&requests[2]).starts_with("This is part 3 of 3"));

    let consolidation = request_text_of(&requests[3]);
    assert!(consolidation.starts_with("Combine these partial summaries"));
    assert!(consolidation.contains("Alpha covered.\n\nBeta covered.\n\nGamma covered."));
}

#[tokio::test]
async fn test_failed_chunk_is_tolerated() {
    // Arrange - the middle chunk's request is rejected by the server
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["Alpha covered."]));
    transport.enqueue_streaming_response(500, vec![Bytes::from(SERVER_ERROR_BODY)]);
    transport.enqueue_streaming_response(200, stream_body(&["Gamma covered."]));
    transport.enqueue_streaming_response(200, stream_body(&["Consolidated."]));
    let service = create_test_service(transport.clone());
    let chunks = vec![
        "First segment.".to_string(),
        "Second segment.".to_string(),
        "Third segment.".to_string(),
    ];

    // Act
    let summary = service
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut |_| {})
        .await
        .unwrap();

    // Assert - the surviving partials are consolidated in chunk order
    assert_eq!(summary, "Consolidated.");
    transport.verify_request_count(4);

    let consolidation = request_text_of(&transport.get_requests()[3]);
    assert!(consolidation.contains("Alpha covered.\n\nGamma covered."));
    assert!(!consolidation.contains("Beta"));
}

#[tokio::test]
async fn test_all_chunks_failing_is_an_error() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(500, vec![Bytes::from(SERVER_ERROR_BODY)]);
    transport.enqueue_streaming_response(500, vec![Bytes::from(SERVER_ERROR_BODY)]);
    let service = create_test_service(transport.clone());
    let chunks = vec!["First segment.".to_string(), "Second segment.".to_string()];

    // Act
    let result = service
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut |_| {})
        .await;

    // Assert - no consolidation request is attempted
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::Summary(SummaryError::NoPartialSummaries)
    ));
    transport.verify_request_count(2);
}

#[tokio::test]
async fn test_empty_chunk_list_is_rejected_before_any_request() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    let service = create_test_service(transport.clone());

    // Act
    let result = service
        .summarize_transcript(&[], SummaryMode::Bullets, &mut |_| {})
        .await;

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::Summary(SummaryError::EmptyTranscript)
    ));
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_blank_chunk_is_a_validation_error() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    let service = create_test_service(transport.clone());
    let chunks = vec!["Real content.".to_string(), "   ".to_string()];

    // Act
    let result = service
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut |_| {})
        .await;

    // Assert
    match result.unwrap_err() {
        SummarizerError::Request(RequestError::ValidationError { details, .. }) => {
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].field, "chunks[1]");
        }
        other => panic!("Expected validation error, got: {:?}", other),
    }
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_mode_shapes_the_prompt() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["TL;DR."]));
    transport.enqueue_streaming_response(200, stream_body(&["Notes."]));
    let service = create_test_service(transport.clone());
    let chunks = vec!["A transcript.".to_string()];

    // Act
    service
        .summarize_transcript(&chunks, SummaryMode::Tldr, &mut |_| {})
        .await
        .unwrap();
    service
        .summarize_transcript(&chunks, SummaryMode::from_name("detailed"), &mut |_| {})
        .await
        .unwrap();

    // Assert
    let requests = transport.get_requests();
    assert!(request_text_of(&requests[0])
        .starts_with("Provide a quick TL;DR summary in 1-2 sentences."));
    assert!(request_text_of(&requests[1]).contains("study notes"));
}

#[tokio::test]
async fn test_summarize_text_chunks_by_configured_size() {
    // Arrange - sentence lengths 31, 32 and 29; the first two pack
    // into one 64-character chunk
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["Partial one."]));
    transport.enqueue_streaming_response(200, stream_body(&["Partial two."]));
    transport.enqueue_streaming_response(200, stream_body(&["Combined."]));
    let config = SummarizerConfig::builder()
        .api_key(SecretString::new("test-api-key".into()))
        .max_chunk_size(64)
        .build()
        .unwrap();
    let service = create_service_with_config(config, transport.clone());
    let text =
        "Rust ownership explained today. Borrowing rules are strict here. Lifetimes close the loop now.";

    // Act
    let summary = service
        .summarize_text(text, SummaryMode::Bullets, &mut |_| {})
        .await
        .unwrap();

    // Assert - two partial passes plus consolidation
    assert_eq!(summary, "Combined.");
    transport.verify_request_count(3);

    let requests = transport.get_requests();
    let first = request_text_of(&requests[0]);
    assert!(first.starts_with("This is part 1 of 2"));
    assert!(first.contains("Rust ownership explained today. Borrowing rules are strict here."));
    let second = request_text_of(&requests[1]);
    assert!(second.starts_with("This is part 2 of 2"));
    assert!(second.contains("Lifetimes close the loop now."));
}

#[tokio::test]
async fn test_snippet_streams_a_fixed_prompt() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["- Quick take"]));
    let service = create_test_service(transport.clone());

    let mut seen = Vec::new();
    let mut capture = |fragment: &str| seen.push(fragment.to_string());

    // Act
    let summary = service
        .summarize_snippet("Some snippet text.", &mut capture)
        .await
        .unwrap();

    // Assert
    assert_eq!(summary, "- Quick take");
    assert_eq!(seen, vec!["- Quick take"]);
    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, ":streamGenerateContent");

    let prompt = request_text_of(&transport.get_requests()[0]);
    assert_eq!(
        prompt,
        "Summarize this text in 2-3 bullet points: Some snippet text."
    );
}

#[tokio::test]
async fn test_snippet_rejects_blank_text() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    let service = create_test_service(transport.clone());

    // Act
    let result = service.summarize_snippet("  \n ", &mut |_| {}).await;

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::Request(RequestError::ValidationError { .. })
    ));
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_snippet_once_uses_the_oneshot_model() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, &load_fixture("summary/oneshot_success.json"));
    let service = create_test_service(transport.clone());

    // Act
    let summary = service
        .summarize_snippet_once("Explain the borrow checker.")
        .await
        .unwrap();

    // Assert - non-streaming endpoint against the one-shot model
    assert!(summary.starts_with("- Explains the borrow checker"));
    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Post, "gemma-3-4b:generateContent");
    assert!(!transport.get_requests()[0].url.contains("stream"));
}

#[tokio::test]
async fn test_snippet_once_blocked_prompt_yields_no_summary() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(200, &load_fixture("summary/oneshot_blocked.json"));
    let service = create_test_service(transport.clone());

    // Act
    let result = service.summarize_snippet_once("Anything risky.").await;

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::Summary(SummaryError::NoSummaryGenerated)
    ));
}

#[tokio::test]
async fn test_snippet_once_maps_api_errors() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_json_response(
        429,
        r#"{"error":{"code":429,"message":"Resource has been exhausted","status":"RESOURCE_EXHAUSTED"}}"#,
    );
    let service = create_test_service(transport.clone());

    // Act
    let result = service.summarize_snippet_once("A snippet.").await;

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::RateLimit(RateLimitError::TooManyRequests { .. })
    ));
}

#[tokio::test]
async fn test_stream_fragments_exposes_the_raw_stream() {
    // Arrange - the recorded fixture stream
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(
        200,
        vec![Bytes::from(load_fixture("summary/stream_success.json"))],
    );
    let service = create_test_service(transport.clone());

    // Act
    let mut stream = service.stream_fragments("Summarize the video.").await.unwrap();
    let mut fragments = Vec::new();
    while let Some(result) = stream.next().await {
        fragments.push(result.unwrap());
    }

    // Assert
    assert_eq!(fragments.len(), 3);
    assert!(fragments[0].contains("async Rust"));
    assert!(fragments[2].contains("choosing a runtime"));
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_rejected_stream_drains_the_error_body() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(
        429,
        vec![Bytes::from(
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        )],
    );
    let service = create_test_service(transport.clone());

    // Act
    let result = service.stream_fragments("Summarize.").await;

    // Assert
    assert!(matches!(
        result.err().unwrap(),
        SummarizerError::RateLimit(RateLimitError::TooManyRequests { .. })
    ));
}

#[tokio::test]
async fn test_network_failure_opening_the_stream() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_error(TransportError::Connection("dns failure".to_string()));
    let service = create_test_service(transport.clone());

    // Act
    let result = service.summarize_snippet("A snippet.", &mut |_| {}).await;

    // Assert
    assert!(matches!(
        result.unwrap_err(),
        SummarizerError::Network(NetworkError::ConnectionFailed { .. })
    ));
}

#[tokio::test]
async fn test_header_auth_is_sent_as_a_header() {
    // Arrange
    let transport = Arc::new(MockHttpTransport::new());
    transport.enqueue_streaming_response(200, stream_body(&["ok"]));
    let (logger, tracer, metrics) = create_noop_stack("summarizer-test");
    let service = SummaryServiceImpl::new(
        Arc::new(test_config()),
        transport.clone(),
        Arc::new(MockAuthManager::with_header("test-api-key")),
        logger,
        tracer,
        metrics,
    );

    // Act
    service
        .summarize_snippet("A snippet.", &mut |_| {})
        .await
        .unwrap();

    // Assert - the key travels in a header, not the query string
    transport.verify_header(0, "x-goog-api-key", "test-api-key");
    assert!(!transport.get_requests()[0].url.contains("key="));
}
