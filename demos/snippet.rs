//! Quick snippet summarization example.
//!
//! This example demonstrates:
//! - One-shot snippet summaries on the lightweight model
//! - Streaming snippet summaries on the default model
//! - Handling a request that produces no summary
//!
//! # Usage
//!
//! Set your API key as an environment variable:
//! ```bash
//! export GEMINI_API_KEY="your-api-key-here"
//! ```
//!
//! Then run:
//! ```bash
//! cargo run --example snippet
//! ```

use std::io::Write;

use transcript_summarizer::{SummarizerClient, SummarizerClientImpl};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for better logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    println!("=== Snippet Summarization Example ===\n");

    // Step 1: Create client from environment variables
    println!("1. Creating summarizer client from environment...");
    let client = SummarizerClientImpl::from_env()?;
    println!("   ✓ Client created successfully\n");

    let snippet = "The borrow checker verifies that references never outlive the \
                   data they point to. Lifetimes describe these relationships to \
                   the compiler, and most of the time they are inferred without \
                   any annotations.";

    // Step 2: One-shot summary on the lightweight model
    println!("2. Requesting one-shot summary (lightweight model)...\n");
    match client.summary().summarize_snippet_once(snippet).await {
        Ok(summary) => {
            println!("=== One-Shot Summary ===\n");
            println!("{}\n", summary);
        }
        Err(e) => {
            // Blocked prompts and empty candidates land here.
            eprintln!("One-shot summarization failed: {}\n", e);
        }
    }

    // Step 3: The same snippet, streamed from the default model
    println!("3. Requesting streamed summary (default model)...\n");
    println!("=== Streaming Summary ===\n");

    let summary = client
        .summary()
        .summarize_snippet(snippet, &mut |fragment| {
            print!("{}", fragment);
            std::io::stdout().flush().ok();
        })
        .await?;

    println!("\n\nAccumulated {} characters.", summary.chars().count());

    println!("\n=== Example Complete ===");

    Ok(())
}
