//! Error types for path resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up path resolution.
///
/// Resolving an individual target never fails; every problem there becomes
/// a [`ResolvedTarget`](crate::resolver::ResolvedTarget) variant.
#[derive(Debug, Error)]
pub enum Error {
    /// The document root could not be canonicalized.
    #[error("Document root {} is not usable: {source}", .path.display())]
    DocumentRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
