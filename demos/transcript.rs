//! Transcript summarization example.
//!
//! This example demonstrates:
//! - Creating a client from environment variables
//! - Summarizing a chunked YouTube transcript
//! - Watching fragments arrive through the streaming callback
//! - Reading the consolidated final summary
//!
//! # Usage
//!
//! Set your API key as an environment variable:
//! ```bash
//! export GEMINI_API_KEY="your-api-key-here"
//! # or
//! export GOOGLE_API_KEY="your-api-key-here"
//! ```
//!
//! Then run:
//! ```bash
//! cargo run --example transcript
//! ```

use std::io::Write;

use transcript_summarizer::{SummarizerClient, SummarizerClientImpl, SummaryMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for better logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    println!("=== Transcript Summarization Example ===\n");

    // Step 1: Create client from environment variables
    println!("1. Creating summarizer client from environment...");
    let client = SummarizerClientImpl::from_env()?;
    println!("   ✓ Client created successfully\n");

    // Step 2: Prepare the transcript chunks
    // A real application would pull these from a transcript source.
    println!("2. Preparing transcript chunks...");
    let chunks = vec![
        "Welcome back to the channel. Today we are digging into Rust's ownership \
         model and why the borrow checker exists in the first place."
            .to_string(),
        "Every value in Rust has a single owner. When the owner goes out of scope \
         the value is dropped, and that is how Rust frees memory without a garbage \
         collector."
            .to_string(),
        "Borrowing lets other code read or mutate a value without taking ownership. \
         The compiler enforces that you get either many readers or one writer, \
         never both at once."
            .to_string(),
    ];
    println!("   {} chunks prepared\n", chunks.len());

    // Step 3: Summarize with streaming output
    println!("3. Summarizing (fragments appear as they arrive)...\n");
    println!("=== Streaming Output ===\n");

    let mut on_fragment = |fragment: &str| {
        print!("{}", fragment);
        std::io::stdout().flush().ok();
    };

    let summary = client
        .summary()
        .summarize_transcript(&chunks, SummaryMode::Bullets, &mut on_fragment)
        .await?;

    // Step 4: Display the consolidated summary
    // The callback above saw the partial passes too; the returned string is
    // the final consolidation pass only.
    println!("\n\n=== Final Summary ===\n");
    println!("{}", summary);

    println!("\n=== Example Complete ===");

    Ok(())
}
