//! File source abstraction for document loading.

use std::path::Path;

use crate::error::AdvisoryError;

/// Read access to document sources.
///
/// The document index consumes this instead of touching the filesystem so
/// tests (and embedders shipping documents inside a pack file) can supply
/// their own source. A failed read is a degraded-mode condition, never
/// fatal.
pub trait FileReader: Send + Sync {
    /// Whether a readable source exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the full text at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::DocumentUnavailable`] when the source is
    /// missing or unreadable.
    fn read_text(&self, path: &Path) -> Result<String, AdvisoryError>;
}

/// Reader backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String, AdvisoryError> {
        std::fs::read_to_string(path).map_err(|e| AdvisoryError::DocumentUnavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
