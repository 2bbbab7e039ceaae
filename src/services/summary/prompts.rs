//! Prompt templates for transcript summarization.

use std::fmt;

/// Summary style requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryMode {
    /// A quick 1-2 sentence TL;DR.
    Tldr,
    /// 4-6 concise bullet points.
    #[default]
    Bullets,
    /// Detailed study notes.
    Detailed,
}

impl SummaryMode {
    /// Parse a mode name.
    ///
    /// Anything other than the exact lowercase names falls back to `Bullets`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tldr" => Self::Tldr,
            "bullets" => Self::Bullets,
            "detailed" => Self::Detailed,
            _ => Self::Bullets,
        }
    }

    /// The base summarization instruction for this mode.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Tldr => "Provide a quick TL;DR summary in 1-2 sentences.",
            Self::Bullets => "Summarize in 4-6 concise bullet points.",
            Self::Detailed => {
                "Provide detailed study notes with key points, main ideas, and important details."
            }
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tldr => "tldr",
            Self::Bullets => "bullets",
            Self::Detailed => "detailed",
        };
        f.write_str(name)
    }
}

/// Prompt for summarizing one chunk of a multi-chunk transcript.
///
/// `part` is 1-based.
pub fn partial_prompt(part: usize, total: usize, mode: SummaryMode) -> String {
    format!(
        "This is part {} of {} of a YouTube video transcript. {} Focus on the key information in this segment.",
        part,
        total,
        mode.instruction()
    )
}

/// Prompt for consolidating partial summaries into one final summary.
pub fn consolidation_prompt(mode: SummaryMode) -> String {
    format!(
        "Combine these partial summaries of a YouTube video into a single cohesive {} summary. Remove duplicates and ensure logical flow. {}",
        mode,
        mode.instruction()
    )
}

/// Full request text for a summarization prompt over a body of text.
pub fn request_text(prompt: &str, text: &str) -> String {
    format!("{}\n\nText: {}", prompt, text)
}

/// Fixed prompt for quick snippet summaries.
pub fn snippet_prompt(text: &str) -> String {
    format!("Summarize this text in 2-3 bullet points: {}", text)
}
