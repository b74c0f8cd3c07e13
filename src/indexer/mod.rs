// file: src/indexer/mod.rs
// description: keyword indexing module exports and the build_index entry point
// reference: internal module structure

mod builder;
mod events;
mod index;
mod keyword;

pub use builder::{DEFAULT_PROGRESS_INTERVAL, IndexBuilder, IndexRun};
pub use events::{
    IndexEvent, IndexObserver, LogObserver, PageError, PageWarning, ProgressSnapshot,
};
pub use index::{IndexResult, SealedIndex};
pub use keyword::{Keyword, compile_keywords};

use crate::source::TextSource;
use std::collections::BTreeSet;

/// Scans every page of `source` with the default progress interval.
pub fn build_index(
    source: &dyn TextSource,
    keywords: &[Keyword],
    skip: &BTreeSet<u32>,
    observer: &mut dyn IndexObserver,
) -> IndexRun {
    IndexBuilder::new(keywords, skip).build(source, observer)
}
