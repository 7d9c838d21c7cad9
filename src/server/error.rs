//! Error types for the HTTP server.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::Error as ResolverError;

/// Errors that can occur during HTTP server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// The configuration file could not be parsed.
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),

    /// The document root could not be set up.
    #[error("Resolver error: {0}")]
    ResolverError(#[from] ResolverError),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Why a resolved file could not be read.
///
/// Every variant is answered with a 404; they differ only in how they are
/// logged.
#[derive(Debug, Error)]
pub enum ReadFailure {
    /// The file disappeared between resolution and reading.
    #[error("{} vanished before it could be read", .path.display())]
    Missing { path: PathBuf },

    /// The file exists but may not be read.
    #[error("Permission denied reading {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file is not UTF-8 text.
    #[error("{} is not readable as text: {source}", .path.display())]
    NotText {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Anything else.
    #[error("Unexpected error reading {}: {source}", .path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadFailure {
    /// Classify an I/O error raised while reading `path`.
    pub fn classify(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ReadFailure::Missing { path },
            io::ErrorKind::PermissionDenied => ReadFailure::PermissionDenied { path },
            io::ErrorKind::InvalidData => ReadFailure::NotText { path, source },
            _ => ReadFailure::Unexpected { path, source },
        }
    }

    /// Returns true for failures a live document root is expected to produce.
    pub fn is_expected(&self) -> bool {
        !matches!(self, ReadFailure::Unexpected { .. })
    }
}
