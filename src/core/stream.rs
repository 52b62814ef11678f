//! Lazy line splitting over a response body.
//!
//! Streaming completions are handed back as raw lines; interpreting them is
//! left to the caller.

use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt, stream};

use super::error::LlmError;

/// Forward-only stream of raw response lines. Not restartable.
pub type LineStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

struct LineSplitter<S> {
    inner: Pin<Box<S>>,
    buffer: Vec<u8>,
    done: bool,
}

impl<S> LineSplitter<S> {
    fn next_line(&mut self) -> Option<String> {
        let pos = self.buffer.iter().position(|b| *b == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    fn take_remainder(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let mut line = std::mem::take(&mut self.buffer);
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(String::from_utf8_lossy(&line).into_owned())
    }
}

/// Split a byte stream into lines.
///
/// Lines end at `\n`, a trailing `\r` is dropped and empty lines are kept. A
/// final unterminated line is yielded once the body ends. A transport error is
/// yielded in place and ends the stream after any buffered lines.
pub fn lines<S, E>(body: S) -> LineStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    let splitter = LineSplitter {
        inner: Box::pin(body),
        buffer: Vec::new(),
        done: false,
    };

    Box::pin(stream::unfold(splitter, |mut state| async move {
        loop {
            if let Some(line) = state.next_line() {
                return Some((Ok(line), state));
            }
            if state.done {
                return state.take_remainder().map(|line| (Ok(line), state));
            }
            match state.inner.next().await {
                Some(Ok(chunk)) => state.buffer.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    state.done = true;
                    let err = LlmError::Network {
                        message: "Failed to read streamed response body".to_string(),
                        source: Box::new(e),
                    };
                    return Some((Err(err), state));
                }
                None => state.done = true,
            }
        }
    }))
}
