//! Frame encoder
//!
//! Serialization of request and reply frames. Both functions are pure: no
//! I/O, no failure modes for well-formed input.

use super::{Value, CRLF};

/// Encode a command as a request frame.
///
/// Requests are always arrays of bulk strings, regardless of argument
/// content: `*<count>` followed by `$<byte-len>` + payload per argument,
/// every unit CRLF-terminated. Length prefixes count bytes, not characters.
///
/// Arguments are emitted verbatim, embedded CR/LF included; the length
/// prefix stays byte-accurate either way, so content correctness is the
/// caller's responsibility. Empty strings are valid arguments. Callers that
/// need a non-empty argument list enforce it themselves (the client does).
pub fn encode_command<S: AsRef<str>>(args: &[S]) -> Vec<u8> {
    let payload_len: usize = args.iter().map(|a| a.as_ref().len()).sum();
    let mut frame = Vec::with_capacity(payload_len + 16 * (args.len() + 1));

    frame.push(b'*');
    frame.extend_from_slice(args.len().to_string().as_bytes());
    frame.extend_from_slice(CRLF);

    for arg in args {
        let arg = arg.as_ref();
        frame.push(b'$');
        frame.extend_from_slice(arg.len().to_string().as_bytes());
        frame.extend_from_slice(CRLF);
        frame.extend_from_slice(arg.as_bytes());
        frame.extend_from_slice(CRLF);
    }

    frame
}

/// Encode a value as a reply frame.
///
/// The inverse of response decoding for every variant (nested arrays
/// included), which makes it the natural way for test servers and benches to
/// produce wire input. Nesting is walked with an explicit work list rather
/// than call recursion, so attacker-shaped trees cannot exhaust the stack.
pub fn encode_value(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    // LIFO of nodes still to emit; array elements are pushed in reverse so
    // they pop in declaration order.
    let mut pending = vec![value];

    while let Some(v) = pending.pop() {
        match v {
            Value::SimpleString(s) => {
                out.push(b'+');
                out.extend_from_slice(s.as_bytes());
                out.extend_from_slice(CRLF);
            }
            Value::Error(e) => {
                out.push(b'-');
                out.extend_from_slice(e.as_bytes());
                out.extend_from_slice(CRLF);
            }
            Value::Integer(i) => {
                out.push(b':');
                out.extend_from_slice(i.to_string().as_bytes());
                out.extend_from_slice(CRLF);
            }
            Value::BulkString(s) => {
                out.push(b'$');
                out.extend_from_slice(s.len().to_string().as_bytes());
                out.extend_from_slice(CRLF);
                out.extend_from_slice(s.as_bytes());
                out.extend_from_slice(CRLF);
            }
            Value::Null => out.extend_from_slice(b"$-1\r\n"),
            Value::NullArray => out.extend_from_slice(b"*-1\r\n"),
            Value::Array(items) => {
                out.push(b'*');
                out.extend_from_slice(items.len().to_string().as_bytes());
                out.extend_from_slice(CRLF);
                for item in items.iter().rev() {
                    pending.push(item);
                }
            }
        }
    }

    out
}
