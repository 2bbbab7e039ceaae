//! Raw fragment streaming example.
//!
//! This example demonstrates:
//! - Opening the raw fragment stream for a prompt
//! - Processing fragments as they arrive with `StreamExt`
//! - Accumulating the final text
//! - Handling mid-stream errors
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
//! cargo run --example streaming
//! ```

use std::io::Write;

use futures::StreamExt;
use transcript_summarizer::{SummarizerClient, SummarizerClientImpl};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for better logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    println!("=== Raw Fragment Streaming Example ===\n");

    // Step 1: Create client from environment variables
    println!("1. Creating summarizer client from environment...");
    let client = SummarizerClientImpl::from_env()?;
    println!("   ✓ Client created successfully\n");

    // Step 2: Open the fragment stream
    println!("2. Opening fragment stream...");
    let prompt = "Summarize in 4-6 concise bullet points.\n\nText: Rust pairs \
                  zero-cost abstractions with memory safety. The ownership system \
                  tracks every value at compile time, so data races and dangling \
                  pointers are rejected before the program ever runs.";

    let mut stream = client.summary().stream_fragments(prompt).await?;
    println!("   ✓ Stream open\n");

    // Step 3: Process fragments as they arrive
    println!("=== Streaming Response ===\n");

    let mut accumulated = String::new();
    let mut fragment_count = 0;

    while let Some(result) = stream.next().await {
        match result {
            Ok(fragment) => {
                fragment_count += 1;
                print!("{}", fragment);
                std::io::stdout().flush()?;
                accumulated.push_str(&fragment);
            }
            Err(e) => {
                eprintln!("\nError receiving fragment: {}", e);
                return Err(e.into());
            }
        }
    }

    // Step 4: Report stream statistics
    println!("\n\n=== Streaming Complete ===");
    println!("Fragments received: {}", fragment_count);
    println!("Total characters:   {}", accumulated.chars().count());

    Ok(())
}
