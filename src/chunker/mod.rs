//! Sentence-aware transcript chunking.
//!
//! Long transcripts are split into chunks that each stay under a
//! character budget, without ever splitting a sentence. A sentence
//! boundary is any run of whitespace that directly follows `.`, `!`,
//! or `?`; the punctuation stays with its sentence and the whitespace
//! run is consumed.

/// Split `text` into chunks of at most `max_chunk_size` characters.
///
/// Sentences are packed greedily: a chunk closes when the next
/// sentence would push it past the budget. A single sentence longer
/// than the budget becomes its own oversized chunk rather than being
/// split. Chunks are trimmed and never empty; empty or whitespace-only
/// input yields no chunks.
///
/// Sizes are measured in characters, not bytes.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();

        // The joining space counts against the budget too.
        if !current.is_empty() && current_len + 1 + sentence_len > max_chunk_size {
            chunks.push(std::mem::take(&mut current).trim().to_string());
            current_len = 0;
        }

        if current.is_empty() {
            current.push_str(sentence);
            current_len = sentence_len;
        } else {
            current.push(' ');
            current.push_str(sentence);
            current_len += 1 + sentence_len;
        }
    }

    let last = current.trim();
    if !last.is_empty() {
        chunks.push(last.to_string());
    }

    chunks
}

/// Split on whitespace runs that follow sentence-ending punctuation.
///
/// `"3.14 is pi"` does not split at the decimal point because no
/// whitespace follows it.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let boundary = match chars.peek() {
            Some(&(j, next)) if next.is_whitespace() => j,
            _ => continue,
        };

        sentences.push(&text[start..boundary]);

        // Consume the whitespace run.
        start = boundary;
        while let Some(&(k, w)) = chars.peek() {
            if w.is_whitespace() {
                start = k + w.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   \n\t  ", 100).is_empty());
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = chunk_text("One sentence. And another.", 100);
        assert_eq!(chunks, vec!["One sentence. And another."]);
    }

    #[test]
    fn test_decimal_point_is_not_a_boundary() {
        let sentences = split_sentences("Pi is 3.14159 exactly. Nice!");
        assert_eq!(sentences, vec!["Pi is 3.14159 exactly.", "Nice!"]);
    }

    #[test]
    fn test_whitespace_run_consumed_at_boundary() {
        let sentences = split_sentences("First.  \n\n Second?\tThird.");
        assert_eq!(sentences, vec!["First.", "Second?", "Third."]);
    }
}
