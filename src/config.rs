//! Configuration for wiredis
//!
//! Centralized configuration with sensible defaults.

use crate::protocol::DecoderOptions;

/// Main configuration for a wiredis client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub addr: String,

    /// Size of each transport read in bytes. Reads may still return fewer
    /// bytes; the client never assumes whole messages per read.
    pub recv_buffer_size: usize,

    // -------------------------------------------------------------------------
    // Command Configuration
    // -------------------------------------------------------------------------
    /// Max length of a raw command line accepted by `execute_line` (in bytes)
    pub max_command_len: usize,

    // -------------------------------------------------------------------------
    // Decoder Configuration
    // -------------------------------------------------------------------------
    /// Options applied to the reply decoder session
    pub decoder: DecoderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:6379".to_string(),
            recv_buffer_size: 8192,
            max_command_len: 1024 * 1024, // 1 MiB
            decoder: DecoderOptions::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address (host:port)
    pub fn addr(mut self, addr: impl Into<String>) -> Self {
        self.config.addr = addr.into();
        self
    }

    /// Set the transport read size (in bytes)
    pub fn recv_buffer_size(mut self, size: usize) -> Self {
        self.config.recv_buffer_size = size;
        self
    }

    /// Set the max raw command line length (in bytes)
    pub fn max_command_len(mut self, len: usize) -> Self {
        self.config.max_command_len = len;
        self
    }

    /// Set the reply decoder options
    pub fn decoder(mut self, options: DecoderOptions) -> Self {
        self.config.decoder = options;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
