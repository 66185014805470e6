//! Test readers — mock `FileReader` implementations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lorekeeper_core::error::AdvisoryError;
use lorekeeper_core::reader::FileReader;

/// A reader serving files from an in-memory map.
#[derive(Debug, Default)]
pub struct InMemoryReader {
    files: HashMap<PathBuf, String>,
}

impl InMemoryReader {
    /// Creates a reader with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `text` under `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }
}

impl FileReader for InMemoryReader {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String, AdvisoryError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AdvisoryError::DocumentUnavailable {
                path: path.display().to_string(),
                reason: "not in the in-memory set".to_owned(),
            })
    }
}

/// A reader for which every path is missing. Useful for degraded-mode
/// scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingReader;

impl FileReader for FailingReader {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn read_text(&self, path: &Path) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::DocumentUnavailable {
            path: path.display().to_string(),
            reason: "reader always fails".to_owned(),
        })
    }
}
