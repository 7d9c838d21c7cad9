//! File-system access used by the resolver and the request handler.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The file-system queries needed to resolve and serve a target.
pub trait FileSystem {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns true if `path` is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns the absolute, symlink-resolved form of `path`.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Reads the whole file at `path` as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
