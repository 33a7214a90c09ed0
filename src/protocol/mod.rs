//! Protocol Module
//!
//! Defines the RESP wire format shared by the encoder and the decoder.
//!
//! ## Wire Format
//!
//! Every control line is terminated by CRLF. The first byte of a control
//! line selects the frame type:
//!
//! ```text
//! +OK\r\n                            simple string
//! -ERR unknown command\r\n           error reply
//! :1000\r\n                          integer (signed base-10)
//! $6\r\nfoobar\r\n                   bulk string ($-1 = null)
//! *2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n   array (*-1 = null array)
//! ```
//!
//! Arrays nest: each element is itself any frame type, and an array is only
//! complete once exactly its declared count of elements has been decoded.
//! Requests are always encoded as arrays of bulk strings regardless of
//! argument content.

mod value;
mod encoder;
mod decoder;

pub use value::Value;
pub use encoder::{encode_command, encode_value};
pub use decoder::{DecoderOptions, ResponseDecoder};

/// The CRLF sequence terminating every control line.
pub const CRLF: &[u8] = b"\r\n";
