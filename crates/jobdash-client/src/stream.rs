//! Streamed output of a running job
//!
//! `GET /run/:id` answers with chunked text wrapped in `<pre>`…`</pre>` for
//! browsers. [`OutputDecoder`] turns raw chunks into displayable text:
//! UTF-8 sequences split across chunks are reassembled, the wrapper tags are
//! removed even when a tag is split, and NUL padding is dropped.

use std::pin::Pin;

use futures_util::{Stream, StreamExt};

use crate::error::ClientError;

const WRAPPER_TAGS: [&str; 2] = ["<pre>", "</pre>"];

type ChunkStream = Pin<Box<dyn Stream<Item = Result<Vec<u8>, ClientError>> + Send>>;

/// Decoded text chunks of a job run
pub struct RunStream {
    job_id: String,
    inner: ChunkStream,
    decoder: OutputDecoder,
    finished: bool,
}

impl std::fmt::Debug for RunStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunStream")
            .field("job_id", &self.job_id)
            .field("finished", &self.finished)
            .finish()
    }
}

impl RunStream {
    /// Wrap any stream of raw byte chunks
    pub fn new<S>(job_id: impl Into<String>, inner: S) -> Self
    where
        S: Stream<Item = Result<Vec<u8>, ClientError>> + Send + 'static,
    {
        Self {
            job_id: job_id.into(),
            inner: Box::pin(inner),
            decoder: OutputDecoder::new(),
            finished: false,
        }
    }

    /// Stream the body of a `reqwest` response
    pub fn from_response(job_id: impl Into<String>, response: reqwest::Response) -> Self {
        let chunks = response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(ClientError::from));
        Self::new(job_id, chunks)
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Next piece of decoded text.
    ///
    /// Chunks that decode to nothing (a lone `<pre>`, padding) are skipped.
    /// Returns `None` once the backend closes the stream.
    pub async fn next_text(&mut self) -> Option<Result<String, ClientError>> {
        while !self.finished {
            match self.inner.next().await {
                Some(Ok(bytes)) => {
                    let text = self.decoder.push(&bytes);
                    if !text.is_empty() {
                        return Some(Ok(text));
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    let rest = self.decoder.finish();
                    if !rest.is_empty() {
                        return Some(Ok(rest));
                    }
                }
            }
        }
        None
    }
}

/// Incremental decoder for run output chunks
#[derive(Debug, Default)]
pub struct OutputDecoder {
    /// Bytes of an incomplete UTF-8 sequence at the end of the last chunk
    pending_bytes: Vec<u8>,
    /// Text that may be the beginning of a wrapper tag
    pending_text: String,
}

impl OutputDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw chunk and return the text that is safe to display
    pub fn push(&mut self, chunk: &[u8]) -> String {
        self.pending_bytes.extend_from_slice(chunk);
        let decoded = self.take_utf8();

        let mut text = std::mem::take(&mut self.pending_text);
        text.push_str(&decoded);
        let mut text = strip_wrapper(&text);

        let hold = partial_tag_suffix(&text);
        if hold > 0 {
            self.pending_text = text.split_off(text.len() - hold);
        }
        text
    }

    /// Flush whatever is still buffered when the stream ends
    pub fn finish(&mut self) -> String {
        let mut text = std::mem::take(&mut self.pending_text);
        if !self.pending_bytes.is_empty() {
            text.push_str(&String::from_utf8_lossy(&self.pending_bytes));
            self.pending_bytes.clear();
        }
        text.retain(|c| c != '\0');
        text
    }

    /// Decode as much of `pending_bytes` as possible, keeping an incomplete
    /// trailing sequence for the next chunk.
    fn take_utf8(&mut self) -> String {
        let mut out = String::new();
        let mut bytes = std::mem::take(&mut self.pending_bytes);
        loop {
            match std::str::from_utf8(&bytes) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, rest) = bytes.split_at(e.valid_up_to());
                    // valid_up_to guarantees this prefix decodes
                    out.push_str(&String::from_utf8_lossy(valid));
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            bytes = rest[len..].to_vec();
                        }
                        None => {
                            self.pending_bytes = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }
}

fn strip_wrapper(text: &str) -> String {
    let mut out = text.replace('\0', "");
    for tag in WRAPPER_TAGS {
        out = out.replace(tag, "");
    }
    out
}

/// Length of the longest suffix of `text` that is a proper prefix of a wrapper tag
fn partial_tag_suffix(text: &str) -> usize {
    let Some(start) = text.rfind('<') else {
        return 0;
    };
    let tail = &text[start..];
    let is_prefix = WRAPPER_TAGS
        .iter()
        .any(|tag| tag.len() > tail.len() && tag.starts_with(tail));
    if is_prefix {
        tail.len()
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[test]
    fn test_strips_pre_wrapper() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(b"<pre>hello\n"), "hello\n");
        assert_eq!(decoder.push(b"world\n</pre>"), "world\n");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_tag_split_across_chunks() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(b"done</p"), "done");
        assert_eq!(decoder.push(b"re>"), "");
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn test_lone_angle_bracket_is_flushed_at_end() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(b"a <"), "a ");
        assert_eq!(decoder.finish(), "<");
    }

    #[test]
    fn test_non_tag_markup_is_kept() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(b"x < y <b>"), "x < y <b>");
    }

    #[test]
    fn test_utf8_sequence_split_across_chunks() {
        let bytes = "héllo".as_bytes();
        let mut decoder = OutputDecoder::new();
        // 'é' is two bytes starting at index 1
        assert_eq!(decoder.push(&bytes[..2]), "h");
        assert_eq!(decoder.push(&bytes[2..]), "éllo");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(&[b'a', 0xff, b'b']), "a\u{fffd}b");
    }

    #[test]
    fn test_nul_padding_is_dropped() {
        let mut decoder = OutputDecoder::new();
        assert_eq!(decoder.push(b"line\n\0\0\0"), "line\n");
    }

    #[tokio::test]
    async fn test_run_stream_yields_text_until_closed() {
        let chunks: Vec<Result<Vec<u8>, ClientError>> = vec![
            Ok(b"<pre>".to_vec()),
            Ok(b"step 1\n".to_vec()),
            Ok(b"step 2\n</pre>".to_vec()),
        ];
        let mut run = RunStream::new("deploy", stream::iter(chunks));

        assert_eq!(run.job_id(), "deploy");
        assert_eq!(run.next_text().await.unwrap().unwrap(), "step 1\n");
        assert_eq!(run.next_text().await.unwrap().unwrap(), "step 2\n");
        assert!(run.next_text().await.is_none());
        assert!(run.next_text().await.is_none());
    }

    #[tokio::test]
    async fn test_run_stream_reports_transport_error_once() {
        let chunks: Vec<Result<Vec<u8>, ClientError>> = vec![
            Ok(b"partial".to_vec()),
            Err(ClientError::Status {
                status: 500,
                body: String::new(),
            }),
        ];
        let mut run = RunStream::new("deploy", stream::iter(chunks));

        assert_eq!(run.next_text().await.unwrap().unwrap(), "partial");
        assert!(run.next_text().await.unwrap().is_err());
        assert!(run.next_text().await.is_none());
    }
}
