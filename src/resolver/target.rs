//! Target classification.

use std::path::{Path, PathBuf};

use log::debug;

use crate::resolver::fs::FileSystem;
use crate::resolver::mime::MimeLookup;
use crate::resolver::root::DocumentRoot;

/// Document served for targets ending in `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// The result of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// An existing file with a known content type.
    File {
        /// Path to read the contents from
        path: PathBuf,
        /// Content type from the MIME lookup
        mime_type: String,
    },
    /// An existing directory requested without a trailing slash.
    Directory {
        /// The directory on disk
        path: PathBuf,
        /// Client-visible path to redirect to, always ending in `/`
        location: String,
    },
    /// Nothing servable: missing, or of an unknown content type.
    NotFound,
    /// The candidate's canonical form escapes the document root.
    OutsideRoot {
        /// The canonical path that failed the containment check
        path: PathBuf,
    },
}

/// Resolves request targets against a [`DocumentRoot`].
pub struct PathResolver<F, M> {
    root: DocumentRoot,
    fs: F,
    mime: M,
}

impl<F: FileSystem, M: MimeLookup> PathResolver<F, M> {
    /// Create a resolver over `root`, querying `fs` and `mime`.
    pub fn new(root: DocumentRoot, fs: F, mime: M) -> Self {
        Self { root, fs, mime }
    }

    /// The file-system collaborator, shared with whoever reads the file.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Classify a request target.
    ///
    /// The steps run in a fixed order: trailing-slash expansion, the
    /// directory check, the containment check, the existence check and
    /// finally the MIME lookup. A trailing-slash target skips the directory
    /// check and goes straight to `index.html` inside it. A directory is
    /// only redirected to if it passes the containment check too.
    pub fn resolve(&self, target: &str) -> ResolvedTarget {
        if target.is_empty() {
            debug!("Empty target");
            return ResolvedTarget::NotFound;
        }
        if !target.starts_with('/') {
            debug!("Target {target:?} does not start with '/', resolving anyway");
        }

        let trimmed = target.strip_prefix('/').unwrap_or(target);
        let wants_index = trimmed.is_empty() || trimmed.ends_with('/');
        let relative = self.root.strip_segment(trimmed).trim_start_matches('/');

        let mut candidate = self.root.path().join(relative);

        if wants_index {
            candidate.push(DEFAULT_DOCUMENT);
        } else if self.fs.exists(&candidate) && !self.fs.is_file(&candidate) {
            if let Err(rejected) = self.contain(&candidate) {
                return rejected;
            }
            let location = if relative.is_empty() {
                "/".to_string()
            } else {
                format!("/{relative}/")
            };
            debug!("{target} is a directory, redirecting to {location}");
            return ResolvedTarget::Directory {
                path: candidate,
                location,
            };
        }

        if let Err(rejected) = self.contain(&candidate) {
            return rejected;
        }

        if !self.fs.exists(&candidate) {
            return ResolvedTarget::NotFound;
        }

        match self.mime.lookup(&candidate) {
            Some(mime_type) => ResolvedTarget::File {
                path: candidate,
                mime_type,
            },
            None => {
                debug!("No content type for {path}", path = candidate.display());
                ResolvedTarget::NotFound
            }
        }
    }

    /// Canonicalize `candidate` and check it lies under the document root.
    fn contain(&self, candidate: &Path) -> Result<(), ResolvedTarget> {
        let canonical = match self.fs.canonicalize(candidate) {
            Ok(canonical) => canonical,
            Err(e) => {
                debug!("Cannot canonicalize {path}: {e}", path = candidate.display());
                return Err(ResolvedTarget::NotFound);
            }
        };

        if !self.root.contains(&canonical) {
            return Err(ResolvedTarget::OutsideRoot { path: canonical });
        }
        Ok(())
    }
}
