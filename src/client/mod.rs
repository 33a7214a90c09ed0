//! Client Module
//!
//! The blocking request/response client and the command-line tokenizer.
//!
//! ## Architecture
//! - One transport value, one decoder session, one in-flight request
//! - Received bytes accumulate until a CRLF boundary, then feed the decoder
//! - No timeouts or retries: a read that never completes blocks the call

mod connection;
mod tokenizer;

pub use connection::Client;
pub use tokenizer::tokenize;
