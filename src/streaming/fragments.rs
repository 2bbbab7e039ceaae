//! Lazy stream of summary text fragments.
//!
//! `SummaryStream` drives a transport byte stream through a
//! [`ChunkExtractor`](super::ChunkExtractor), yielding one `String`
//! per response object as it completes on the wire. Nothing is read
//! from the transport until the stream is polled.

use bytes::Bytes;
use futures::Stream;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::extractor::ChunkExtractor;
use crate::error::{ResponseError, SummarizerError};
use crate::transport::{ChunkedStream, TransportError};

/// Streaming text fragments from a `streamGenerateContent` response.
///
/// Items are the non-empty text of each complete response object, in
/// wire order. A transport failure mid-stream yields one `Err` item
/// and then ends the stream. Trailing bytes that never formed a
/// complete object are dropped when the transport finishes.
pub struct SummaryStream {
    inner: ChunkedStream,
    extractor: ChunkExtractor,
    /// Fragments extracted but not yet yielded.
    ready: VecDeque<String>,
    /// Bytes of a multi-byte character split across transport chunks.
    pending_utf8: Vec<u8>,
    finished: bool,
    failed: bool,
}

impl SummaryStream {
    /// Wrap a transport byte stream.
    pub fn new(inner: ChunkedStream) -> Self {
        Self {
            inner,
            extractor: ChunkExtractor::new(),
            ready: VecDeque::new(),
            pending_utf8: Vec::new(),
            finished: false,
            failed: false,
        }
    }

    /// Decode as much of `bytes` as is valid UTF-8 and feed it to the
    /// extractor, carrying any split trailing character to the next
    /// chunk.
    fn ingest(&mut self, bytes: &Bytes) -> Result<(), SummarizerError> {
        self.pending_utf8.extend_from_slice(bytes);

        match std::str::from_utf8(&self.pending_utf8) {
            Ok(text) => {
                self.ready.extend(self.extractor.feed(text));
                self.pending_utf8.clear();
                Ok(())
            }
            Err(err) if err.error_len().is_none() => {
                // Incomplete trailing character: feed the valid prefix
                // and keep the tail for the next chunk.
                let valid_up_to = err.valid_up_to();
                let text = std::str::from_utf8(&self.pending_utf8[..valid_up_to])
                    .map_err(|_| SummarizerError::Response(ResponseError::MalformedChunk {
                        message: "Invalid UTF-8 in stream".to_string(),
                    }))?;
                self.ready.extend(self.extractor.feed(text));
                self.pending_utf8.drain(..valid_up_to);
                Ok(())
            }
            Err(_) => Err(SummarizerError::Response(ResponseError::MalformedChunk {
                message: "Invalid UTF-8 in stream".to_string(),
            })),
        }
    }
}

/// A transport failure after the stream opened is an interruption.
fn map_stream_error(err: TransportError) -> SummarizerError {
    SummarizerError::Response(ResponseError::StreamInterrupted {
        message: err.to_string(),
    })
}

impl Stream for SummaryStream {
    type Item = Result<String, SummarizerError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(text) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(text)));
            }

            if this.failed || this.finished {
                return Poll::Ready(None);
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    if let Err(error) = this.ingest(&bytes) {
                        this.failed = true;
                        return Poll::Ready(Some(Err(error)));
                    }
                    // Loop: either something is ready now or we poll
                    // the transport again.
                }
                Poll::Ready(Some(Err(err))) => {
                    this.failed = true;
                    return Poll::Ready(Some(Err(map_stream_error(err))));
                }
                Poll::Ready(None) => {
                    this.finished = true;
                    let remainder = this.extractor.remainder();
                    if !remainder.trim().is_empty() {
                        tracing::debug!(
                            discarded_bytes = remainder.len(),
                            "stream ended with incomplete trailing data"
                        );
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
