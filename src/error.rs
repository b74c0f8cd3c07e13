// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexerError>;

/// Exit status for a document that does not exist (sysexits `EX_NOINPUT`).
pub const EXIT_DOCUMENT_NOT_FOUND: u8 = 66;
/// Exit status for a document that exists but cannot be opened (sysexits `EX_DATAERR`).
pub const EXIT_DOCUMENT_UNREADABLE: u8 = 65;
pub const EXIT_GENERAL_ERROR: u8 = 1;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File '{}' not found", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Failed to open document {path}: {message}")]
    DocumentOpen { path: PathBuf, message: String },

    #[error("Error processing page {page}: {message}")]
    PageExtraction { page: u32, message: String },

    #[error("Invalid keyword '{keyword}': {source}")]
    InvalidKeyword {
        keyword: String,
        source: regex::Error,
    },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IndexerError {
    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            IndexerError::DocumentNotFound(_) => EXIT_DOCUMENT_NOT_FOUND,
            IndexerError::DocumentOpen { .. } => EXIT_DOCUMENT_UNREADABLE,
            _ => EXIT_GENERAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for IndexerError {
    fn from(err: serde_json::Error) -> Self {
        IndexerError::Serialization(err.to_string())
    }
}
