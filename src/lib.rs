//! # wiredis
//!
//! A minimal blocking client for the RESP wire protocol with:
//! - One-call command framing (arrays of bulk strings)
//! - An incremental reply decoder that survives arbitrary chunking
//! - A transport-generic client for sockets or in-memory streams
//! - A quote-aware tokenizer for human-typed command lines
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Client (blocking)                        │
//! │              execute(args) / execute_line(line)              │
//! └──────────┬──────────────────────────────────────▲───────────┘
//!            │ frame                          reply │
//!            ▼                                      │
//!   ┌─────────────────┐                   ┌─────────────────┐
//!   │  FrameEncoder   │                   │ ResponseDecoder │
//!   │ (args → bytes)  │                   │ (chunks → Value)│
//!   └────────┬────────┘                   └────────▲────────┘
//!            │                                     │
//! ┌──────────▼─────────────────────────────────────┴───────────┐
//! │                 Transport (Read + Write)                    │
//! │                  TcpStream or test stub                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ProtocolError, Result};
pub use config::Config;
pub use client::{tokenize, Client};
pub use protocol::{encode_command, encode_value, DecoderOptions, ResponseDecoder, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of wiredis
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
