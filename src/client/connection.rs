//! Client Connection
//!
//! Blocking request/response exchange over a byte-stream transport.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{ProtocolError, Result};
use crate::protocol::{encode_command, ResponseDecoder, Value, CRLF};

use super::tokenizer::tokenize;

/// A blocking client for a single server connection.
///
/// Generic over the transport so anything `Read + Write` can stand in for a
/// socket. One request is in flight at a time; the decoder session is reset
/// after every exchange, so a single client can issue any number of commands
/// back to back.
pub struct Client<S> {
    /// Byte-stream transport (reads may be short)
    transport: S,

    /// Reply decode session, one reply at a time
    decoder: ResponseDecoder,

    /// Received bytes not yet fed to the decoder
    buffer: BytesMut,

    /// Scratch space for transport reads
    chunk: Vec<u8>,

    /// Longest raw command line accepted by `execute_line`
    max_command_len: usize,
}

impl Client<TcpStream> {
    /// Connect to a server with default configuration.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;

        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        tracing::debug!("Connected to {}", peer);

        Ok(Self::with_config(stream, &Config::default()))
    }

    /// Connect to the address in `config` and apply its tuning knobs.
    pub fn connect_with(config: &Config) -> Result<Self> {
        let stream = TcpStream::connect(&config.addr)?;
        stream.set_nodelay(true)?;
        tracing::debug!("Connected to {}", config.addr);

        Ok(Self::with_config(stream, config))
    }
}

impl<S: Read + Write> Client<S> {
    /// Wrap an established transport with default configuration.
    pub fn new(transport: S) -> Self {
        Self::with_config(transport, &Config::default())
    }

    /// Wrap an established transport with explicit configuration.
    pub fn with_config(transport: S, config: &Config) -> Self {
        Self {
            transport,
            decoder: ResponseDecoder::with_options(config.decoder.clone()),
            buffer: BytesMut::with_capacity(config.recv_buffer_size),
            chunk: vec![0; config.recv_buffer_size],
            max_command_len: config.max_command_len,
        }
    }

    /// Send a command given as argument words and return the decoded reply.
    ///
    /// The words are framed as an array of bulk strings, written in one
    /// piece, then the reply is read until it decodes completely. A server
    /// error reply surfaces as `ProtocolError::Remote` and leaves the
    /// connection usable; any other error means the stream state is unknown
    /// and the client should be dropped.
    pub fn execute<A: AsRef<str>>(&mut self, args: &[A]) -> Result<Value> {
        if args.is_empty() {
            return Err(ProtocolError::EmptyCommand);
        }
        tracing::debug!(command = args[0].as_ref(), args = args.len(), "Executing");

        let frame = encode_command(args);
        let result = self.exchange(&frame);

        // The decode session is single-use. Clear it for the next command
        // whether this one succeeded or failed.
        self.decoder.reset();
        self.buffer.clear();

        result
    }

    /// Send a human-typed command line.
    ///
    /// The line is split into words by [`tokenize`], so quoted arguments
    /// keep their inner whitespace. Lines longer than the configured limit
    /// are rejected before any bytes touch the wire.
    pub fn execute_line(&mut self, line: &str) -> Result<Value> {
        if line.len() > self.max_command_len {
            return Err(ProtocolError::CommandTooLarge {
                size: line.len(),
                max: self.max_command_len,
            });
        }

        let args = tokenize(line);
        self.execute(&args)
    }

    fn exchange(&mut self, frame: &[u8]) -> Result<Value> {
        self.transport.write_all(frame)?;
        self.transport.flush()?;
        tracing::trace!(bytes = frame.len(), "Request written");

        loop {
            let n = self.transport.read(&mut self.chunk)?;
            if n == 0 {
                return Err(ProtocolError::ConnectionClosed);
            }
            tracing::trace!(bytes = n, "Chunk received");
            self.buffer.extend_from_slice(&self.chunk[..n]);

            // Feed only on a line boundary. A partial trailing line stays
            // buffered until the next read completes it.
            if self.buffer.ends_with(CRLF) {
                self.decoder.feed(&self.buffer)?;
                self.buffer.clear();
            }

            if let Some(value) = self.decoder.take() {
                return Ok(value);
            }
        }
    }
}
