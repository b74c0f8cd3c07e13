// file: src/source/memory.rs
// description: in-memory text source for callers that already hold page text

use super::TextSource;
use crate::error::{IndexerError, Result};
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct MemorySource {
    pages: Vec<std::result::Result<String, String>>,
    calls: Cell<usize>,
}

impl MemorySource {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_failures(pages.into_iter().map(|text| Ok(text.into())))
    }

    /// Pages given as `Err(message)` fail extraction with that message.
    pub fn with_failures<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = std::result::Result<String, String>>,
    {
        Self {
            pages: pages.into_iter().collect(),
            calls: Cell::new(0),
        }
    }

    /// Number of `page_text` calls served so far.
    pub fn extraction_calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextSource for MemorySource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.calls.set(self.calls.get() + 1);

        let slot = page
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .ok_or_else(|| IndexerError::PageExtraction {
                page,
                message: "page out of range".to_string(),
            })?;

        slot.clone()
            .map_err(|message| IndexerError::PageExtraction { page, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_pages() {
        let source = MemorySource::with_failures(vec![
            Ok("first".to_string()),
            Err("broken stream".to_string()),
        ]);

        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_text(1).unwrap(), "first");
        assert!(source.page_text(2).is_err());
        assert!(source.page_text(0).is_err());
        assert!(source.page_text(3).is_err());
        assert_eq!(source.extraction_calls(), 4);
    }
}
