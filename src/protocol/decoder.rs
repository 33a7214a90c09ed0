//! Response decoder
//!
//! The incremental state machine at the heart of the crate: it consumes
//! reply bytes in whatever batches the transport produced them and exposes a
//! single decoded [`Value`] once a complete top-level frame has been seen.
//!
//! A session accepts input through [`ResponseDecoder::feed`], which takes a
//! batch of zero or more *complete* lines: the batch must end on a CRLF
//! boundary, since partial trailing data belongs to the caller's buffering.
//! Nested arrays are tracked on an explicit stack of in-progress aggregates,
//! so arbitrarily deep input cannot exhaust the call stack, and inner arrays
//! close in a chain the moment their last element arrives.
//!
//! A session decodes exactly one reply: once complete it must be drained
//! with [`ResponseDecoder::take`] and returned to its initial state with
//! [`ResponseDecoder::reset`] before the next reply. Feeding a line to a
//! completed session is an error, not a no-op.

use tracing::trace;

use super::{Value, CRLF};
use crate::error::{ProtocolError, Result};

// Protocol-level limits on declared lengths, applied before any allocation.
const MAX_ARRAY_ELEMENTS: usize = 1024 * 1024;
const MAX_BULK_LEN: usize = 512 * 1024 * 1024; // 512 MiB

// Upper bound on the capacity reserved from a declared count alone; pending
// arrays grow past it on demand.
const ARRAY_CAPACITY_HINT: usize = 1024;

/// Options for a decode session, fixed at construction.
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Decode a negative array count (`*-1`) as a null array, mirroring the
    /// `$-1` null bulk string. When disabled, negative counts fail with
    /// [`ProtocolError::MalformedLength`] instead.
    pub negative_count_as_null: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            negative_count_as_null: true,
        }
    }
}

/// An array under construction: elements decoded so far plus the declared
/// total fixed by the array's count prefix.
#[derive(Debug)]
struct PendingArray {
    items: Vec<Value>,
    expected: usize,
}

/// A resumable decode session for a single reply.
///
/// The decoder performs no I/O and never blocks; it is a pure state
/// transition function over buffered input, so it can be driven from any
/// concurrency model with one session per connection. A single session must
/// not be shared across threads or replies.
#[derive(Debug)]
pub struct ResponseDecoder {
    /// Open arrays, outermost first. Completed values append to the
    /// innermost entry; with an empty stack they are the top-level result.
    stack: Vec<PendingArray>,

    /// When set, the next line is literal bulk data of exactly this many
    /// bytes rather than a control line.
    pending_bulk: Option<usize>,

    /// Set exactly once per reply; cleared only by `reset`.
    completed: bool,

    /// The decoded reply, present from completion until taken or reset.
    result: Option<Value>,

    options: DecoderOptions,
}

impl ResponseDecoder {
    /// Create a session with default options.
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    /// Create a session with explicit options.
    pub fn with_options(options: DecoderOptions) -> Self {
        Self {
            stack: Vec::new(),
            pending_bulk: None,
            completed: false,
            result: None,
            options,
        }
    }

    /// Feed a batch of complete lines to the session.
    ///
    /// The batch must end on a CRLF boundary; otherwise nothing is consumed
    /// and [`ProtocolError::UnterminatedInput`] is returned. An empty batch
    /// is a no-op. Lines are processed in order; the first failure aborts
    /// the batch and leaves the session in an indeterminate state that only
    /// [`reset`](Self::reset) can clear.
    pub fn feed(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        if !data.ends_with(CRLF) {
            return Err(ProtocolError::UnterminatedInput);
        }
        trace!(bytes = data.len(), "feeding decoder");

        let mut rest = data;
        while !rest.is_empty() {
            // The trailing CRLF guarantees a terminator for every line.
            let Some(pos) = find_crlf(rest) else {
                return Err(ProtocolError::UnterminatedInput);
            };
            let line = &rest[..pos];
            rest = &rest[pos + CRLF.len()..];
            self.consume_line(line)?;
        }
        Ok(())
    }

    /// True once a complete top-level value has been decoded.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Remove the decoded reply from a completed session.
    ///
    /// Returns `None` while decoding is still in progress or if the value
    /// was already taken. The session remains completed (and keeps rejecting
    /// input) until `reset`.
    pub fn take(&mut self) -> Option<Value> {
        self.result.take()
    }

    /// Return the session to its initial idle state: empty stack, no pending
    /// bulk length, no completed flag, no stored result.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.pending_bulk = None;
        self.completed = false;
        self.result = None;
    }

    /// Run one terminator-stripped line through the state machine.
    fn consume_line(&mut self, line: &[u8]) -> Result<()> {
        if self.completed {
            return Err(ProtocolError::OverfeedAfterCompletion);
        }
        trace!(len = line.len(), depth = self.stack.len(), "consuming line");

        // Literal bulk data takes priority over control dispatch.
        if let Some(expected) = self.pending_bulk.take() {
            if line.len() != expected {
                return Err(ProtocolError::BulkLengthMismatch {
                    expected,
                    actual: line.len(),
                });
            }
            let text = String::from_utf8_lossy(line).into_owned();
            self.complete_value(Value::BulkString(text));
            return Ok(());
        }

        // An empty control line means the raw stream held a bare CRLF where
        // a type prefix was expected.
        let Some((&prefix, rest)) = line.split_first() else {
            return Err(ProtocolError::UnknownTypePrefix('\r'));
        };

        match prefix {
            b'+' => {
                let text = String::from_utf8_lossy(rest).into_owned();
                self.complete_value(Value::SimpleString(text));
                Ok(())
            }
            b'-' => {
                // A server-reported error aborts the decode outright; it is
                // never surfaced as a decoded value.
                let text = String::from_utf8_lossy(rest).into_owned();
                Err(ProtocolError::Remote(text))
            }
            b':' => {
                let n = parse_i64(rest).ok_or_else(|| {
                    ProtocolError::MalformedInteger(String::from_utf8_lossy(rest).into_owned())
                })?;
                self.complete_value(Value::Integer(n));
                Ok(())
            }
            b'$' => {
                let len = parse_i64(rest).ok_or_else(|| malformed_length(rest))?;
                if len == -1 {
                    self.complete_value(Value::Null);
                } else if len < -1 || len > MAX_BULK_LEN as i64 {
                    return Err(malformed_length(rest));
                } else {
                    self.pending_bulk = Some(len as usize);
                }
                Ok(())
            }
            b'*' => {
                let count = parse_i64(rest).ok_or_else(|| malformed_length(rest))?;
                if count == 0 {
                    self.complete_value(Value::Array(Vec::new()));
                } else if count < 0 {
                    if !self.options.negative_count_as_null {
                        return Err(malformed_length(rest));
                    }
                    self.complete_value(Value::NullArray);
                } else if count > MAX_ARRAY_ELEMENTS as i64 {
                    return Err(malformed_length(rest));
                } else {
                    // A header line is a few bytes; its declared count is
                    // only a clamped capacity hint, never an up-front
                    // reservation.
                    self.stack.push(PendingArray {
                        items: Vec::with_capacity((count as usize).min(ARRAY_CAPACITY_HINT)),
                        expected: count as usize,
                    });
                }
                Ok(())
            }
            other => Err(ProtocolError::UnknownTypePrefix(other as char)),
        }
    }

    /// Route a completed value: append it to the innermost open array, then
    /// close filled arrays outward until one stays open or the stack empties.
    ///
    /// Closure chaining is a loop, not call recursion: nesting depth is
    /// input-controlled.
    fn complete_value(&mut self, mut value: Value) {
        loop {
            match self.stack.last_mut() {
                None => {
                    trace!("reply complete");
                    self.completed = true;
                    self.result = Some(value);
                    return;
                }
                Some(top) => {
                    top.items.push(value);
                    if top.items.len() < top.expected {
                        return;
                    }
                }
            }
            // The innermost array reached its declared count: pop it and
            // carry it upward as a completed value of its own.
            let Some(filled) = self.stack.pop() else {
                return;
            };
            value = Value::Array(filled.items);
        }
    }
}

impl Default for ResponseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the next CRLF sequence in a buffer.
fn find_crlf(src: &[u8]) -> Option<usize> {
    src.windows(CRLF.len()).position(|window| window == CRLF)
}

/// Parse a signed base-10 integer from raw line bytes.
fn parse_i64(bytes: &[u8]) -> Option<i64> {
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

fn malformed_length(bytes: &[u8]) -> ProtocolError {
    ProtocolError::MalformedLength(String::from_utf8_lossy(bytes).into_owned())
}
