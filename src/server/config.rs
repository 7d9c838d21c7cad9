//! Server configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::server::error::Error;

/// HTTP server configuration.
///
/// Every field may be omitted from a JSON config file and falls back to
/// its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The host to bind to, also used in redirect locations.
    pub host: String,
    /// The port to bind to, also used in redirect locations.
    pub port: u16,
    /// The directory to serve files from.
    pub document_root: PathBuf,
    /// The size of the single read taken from each connection.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            document_root: PathBuf::from("www"),
            read_buffer_size: 1024,
        }
    }
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The `host:port` address to listen on.
    pub fn bind_addr(&self) -> String {
        format!("{host}:{port}", host = self.host, port = self.port)
    }
}
