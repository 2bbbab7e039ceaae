//! Incremental extraction of summary text from chunked JSON streams.
//!
//! The streaming endpoint returns a JSON array of response objects,
//! delivered in arbitrary HTTP fragment boundaries:
//! ```json
//! [{"candidates":[...]},
//! {"candidates":[...]}]
//! ```
//!
//! `ChunkExtractor` consumes those fragments and yields the text of
//! each complete response object as soon as its closing brace arrives.
//! It never re-scans bytes it has already seen: the scan position and
//! brace depth persist across `feed` calls.

use crate::types::GenerateContentResponse;

/// Scanner state across `feed` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtractorState {
    /// Between objects: skipping whitespace, commas, and array brackets
    /// until the next `{`.
    Scanning,
    /// Inside an object, tracking nesting depth.
    ObjectOpen { depth: usize },
}

/// Incremental parser for the streaming response array.
///
/// Call [`feed`](Self::feed) with each fragment as it arrives; every
/// complete response object whose first candidate carries non-empty
/// text yields one entry in the returned vector. Objects that parse
/// but carry no text (safety placeholders, usage-only frames) are
/// consumed silently. A balanced span that fails to parse as a
/// response object stays in the buffer and is dropped once a later
/// object parses, or with the trailing remainder at end of stream.
#[derive(Debug)]
pub struct ChunkExtractor {
    /// Unconsumed input. Bytes before `cursor` have been scanned.
    buffer: String,
    /// Byte index where scanning resumes on the next feed.
    cursor: usize,
    /// Byte index of the `{` opening the current candidate object.
    object_start: Option<usize>,
    state: ExtractorState,
    /// True while the scan position is inside a JSON string literal.
    in_string: bool,
    /// True when the previous byte was a backslash inside a string.
    escape_next: bool,
}

impl ChunkExtractor {
    /// Create an empty extractor.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            object_start: None,
            state: ExtractorState::Scanning,
            in_string: false,
            escape_next: false,
        }
    }

    /// Feed one fragment and collect the text of every response object
    /// completed by it.
    pub fn feed(&mut self, fragment: &str) -> Vec<String> {
        self.buffer.push_str(fragment);

        let mut texts = Vec::new();

        while self.cursor < self.buffer.len() {
            let byte = self.buffer.as_bytes()[self.cursor];

            match self.state {
                ExtractorState::Scanning => {
                    if byte == b'{' {
                        self.object_start = Some(self.cursor);
                        self.state = ExtractorState::ObjectOpen { depth: 1 };
                        self.in_string = false;
                        self.escape_next = false;
                    }
                    // Everything else between objects (whitespace,
                    // commas, array brackets, stray bytes) is skipped.
                    self.cursor += 1;
                }
                ExtractorState::ObjectOpen { depth } => {
                    if self.escape_next {
                        self.escape_next = false;
                        self.cursor += 1;
                        continue;
                    }

                    match byte {
                        b'\\' if self.in_string => self.escape_next = true,
                        b'"' => self.in_string = !self.in_string,
                        b'{' | b'[' if !self.in_string => {
                            self.state = ExtractorState::ObjectOpen { depth: depth + 1 };
                        }
                        b'}' | b']' if !self.in_string => {
                            if depth > 1 {
                                self.state = ExtractorState::ObjectOpen { depth: depth - 1 };
                            } else {
                                // Balanced span: candidate response object.
                                let close = self.cursor;
                                if let Some(text) = self.try_consume_object(close) {
                                    texts.push(text);
                                }
                                continue;
                            }
                        }
                        _ => {}
                    }

                    self.cursor += 1;
                }
            }
        }

        texts
    }

    /// Unconsumed input left in the buffer.
    ///
    /// After the stream ends this is the trailing data that never
    /// formed a complete response object.
    pub fn remainder(&self) -> &str {
        &self.buffer
    }

    /// Parse the balanced span ending at `close` and update scanner
    /// state.
    ///
    /// On success the buffer is drained through `close`, which also
    /// discards any earlier span that failed to parse. On failure the
    /// buffer is left intact and scanning resumes after `close`.
    fn try_consume_object(&mut self, close: usize) -> Option<String> {
        let start = self.object_start.unwrap_or(0);
        let candidate = &self.buffer[start..=close];

        match serde_json::from_str::<GenerateContentResponse>(candidate) {
            Ok(response) => {
                let text = response.primary_text().map(str::to_owned);
                self.buffer.drain(..=close);
                self.cursor = 0;
                self.object_start = None;
                self.state = ExtractorState::Scanning;
                text
            }
            Err(_) => {
                self.cursor = close + 1;
                self.object_start = None;
                self.state = ExtractorState::Scanning;
                None
            }
        }
    }
}

impl Default for ChunkExtractor {
    fn default() -> Self {
        Self::new()
    }
}
