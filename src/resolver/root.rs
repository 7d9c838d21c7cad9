//! The document root.

use std::path::{Path, PathBuf};

use log::info;

use crate::resolver::error::Error;
use crate::resolver::fs::FileSystem;

/// The directory tree that is eligible to be served.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    /// The root as configured, used to build candidate paths
    path: PathBuf,
    /// The canonical form, used for the containment check
    canonical: PathBuf,
    /// The root's own directory name, e.g. `www`
    segment: String,
}

impl DocumentRoot {
    /// Open a document root, canonicalizing it through `fs`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DocumentRoot` if the path cannot be canonicalized,
    /// typically because it does not exist.
    pub fn open(path: impl Into<PathBuf>, fs: &impl FileSystem) -> Result<Self, Error> {
        let path = path.into();
        let canonical = fs.canonicalize(&path).map_err(|source| Error::DocumentRoot {
            path: path.clone(),
            source,
        })?;

        let segment = path
            .file_name()
            .or_else(|| canonical.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        info!(
            "Document root {path} (canonical {canonical})",
            path = path.display(),
            canonical = canonical.display()
        );

        Ok(Self {
            path,
            canonical,
            segment,
        })
    }

    /// The root as configured.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The root's directory name as it may appear in request targets.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Remove a leading root segment from a target that has already lost its
    /// leading `/`, so `www/a.html` and `a.html` name the same file.
    pub fn strip_segment<'a>(&self, target: &'a str) -> &'a str {
        if self.segment.is_empty() {
            return target;
        }
        if target == self.segment {
            return "";
        }
        target
            .strip_prefix(self.segment.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(target)
    }

    /// Returns true if `canonical` lies under the canonical root.
    ///
    /// This is a string prefix test, not a component-wise containment test:
    /// a sibling directory whose name extends the root's (`www-secrets` next
    /// to `www`) also passes.
    pub fn contains(&self, canonical: &Path) -> bool {
        canonical
            .to_string_lossy()
            .starts_with(&*self.canonical.to_string_lossy())
    }
}
