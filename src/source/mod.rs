// file: src/source/mod.rs
// description: page text providers consumed by the indexer
// reference: internal module structure

mod memory;
mod pdf;

pub use memory::MemorySource;
pub use pdf::PdfSource;

use crate::error::Result;

/// Supplies the plain text of a document one page at a time.
///
/// Page numbers are 1-based. An empty string means the page has no
/// extractable text; an `Err` is a failure confined to that page.
pub trait TextSource {
    fn page_count(&self) -> u32;

    fn page_text(&self, page: u32) -> Result<String>;
}
