//! Path resolution module.
//!
//! Maps a request target onto a file below the document root and classifies
//! it as a servable file, a directory needing a redirect, or nothing at all.
//! The file system and MIME table are reached through the [`FileSystem`] and
//! [`MimeLookup`] traits so both can be replaced in tests.

mod error;
mod fs;
mod mime;
mod root;
mod target;

// Re-export public items
pub use error::Error;
pub use fs::{FileSystem, OsFileSystem};
pub use mime::{GuessMime, MimeLookup};
pub use root::DocumentRoot;
pub use target::{PathResolver, ResolvedTarget, DEFAULT_DOCUMENT};
