// file: src/report/writer.rs
// description: atomic report file output
// reference: https://docs.rs/tempfile

use crate::error::{IndexerError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes a report next to its destination and renames it into place, so an
/// interrupted run never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, contents: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|source| self.file_error(source))?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(|source| self.file_error(source))?;
        temp.write_all(contents.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|source| self.file_error(source))?;

        temp.persist(&self.path)
            .map_err(|e| self.file_error(e.error))?;

        debug!("Wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn file_error(&self, source: std::io::Error) -> IndexerError {
        IndexerError::FileOperation {
            path: self.path.clone(),
            source,
        }
    }
}
