// file: src/source/pdf.rs
// description: lopdf backed text source with panic isolation per page
// reference: https://docs.rs/lopdf

use super::TextSource;
use crate::error::{IndexerError, Result};
use lopdf::{Document, ObjectId};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

pub struct PdfSource {
    document: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfSource {
    /// Loads the document once; it is held read-only for the rest of the run.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IndexerError::DocumentNotFound(path.to_path_buf()));
        }

        let document = Document::load(path).map_err(|e| IndexerError::DocumentOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let pages = document.get_pages();
        if pages.is_empty() {
            return Err(IndexerError::DocumentOpen {
                path: path.to_path_buf(),
                message: "document has no pages".to_string(),
            });
        }
        debug!("Loaded {} with {} pages", path.display(), pages.len());

        Ok(Self { document, pages })
    }
}

impl TextSource for PdfSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        if !self.pages.contains_key(&page) {
            return Err(IndexerError::PageExtraction {
                page,
                message: "page is not present in the page tree".to_string(),
            });
        }

        // lopdf can panic on malformed content streams
        let document = &self.document;
        let result = panic::catch_unwind(AssertUnwindSafe(|| document.extract_text(&[page])));

        match result {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(IndexerError::PageExtraction {
                page,
                message: e.to_string(),
            }),
            Err(_) => Err(IndexerError::PageExtraction {
                page,
                message: "text extraction panicked on malformed page content".to_string(),
            }),
        }
    }
}
