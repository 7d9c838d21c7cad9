//! Content-type lookup by file extension.

use std::path::Path;

/// Maps a file name to its content type.
///
/// `None` is an expected answer: files without a known type are not served.
pub trait MimeLookup {
    fn lookup(&self, path: &Path) -> Option<String>;
}

/// [`MimeLookup`] backed by the `mime_guess` extension table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessMime;

impl MimeLookup for GuessMime {
    fn lookup(&self, path: &Path) -> Option<String> {
        mime_guess::from_path(path).first_raw().map(str::to_string)
    }
}
