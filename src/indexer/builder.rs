// file: src/indexer/builder.rs
// description: page-major scan that builds the keyword index from a text source
// reference: sequential page processing with per-page failure isolation

use super::events::{IndexEvent, IndexObserver, PageError, PageWarning, ProgressSnapshot};
use super::index::{IndexResult, SealedIndex};
use super::keyword::Keyword;
use crate::error::IndexerError;
use crate::source::TextSource;
use std::collections::BTreeSet;
use tracing::debug;

pub const DEFAULT_PROGRESS_INTERVAL: u32 = 10;

/// Everything a single run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRun {
    pub index: SealedIndex,
    pub page_count: u32,
    /// Skipped pages that exist in the document, ascending.
    pub skipped: Vec<u32>,
    pub warnings: Vec<PageWarning>,
    pub errors: Vec<PageError>,
}

impl IndexRun {
    pub fn pages_scanned(&self) -> u32 {
        self.page_count - self.skipped.len() as u32
    }
}

enum PageOutcome {
    Skipped,
    NoText(PageWarning),
    Failed(PageError),
    Scanned,
}

pub struct IndexBuilder<'a> {
    keywords: &'a [Keyword],
    skip: &'a BTreeSet<u32>,
    progress_interval: u32,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(keywords: &'a [Keyword], skip: &'a BTreeSet<u32>) -> Self {
        Self {
            keywords,
            skip,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_progress_interval(mut self, interval: u32) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    pub fn build(&self, source: &dyn TextSource, observer: &mut dyn IndexObserver) -> IndexRun {
        let page_count = source.page_count();
        let (skipped, outside): (Vec<u32>, Vec<u32>) = self
            .skip
            .iter()
            .copied()
            .partition(|page| (1..=page_count).contains(page));

        if !outside.is_empty() {
            debug!(
                "Ignoring skip entries outside pages 1-{}: {:?}",
                page_count, outside
            );
        }

        let total_to_process = page_count - skipped.len() as u32;
        let mut index = IndexResult::new(self.keywords.iter().map(Keyword::as_str));
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        let mut skipped_so_far = 0;

        for page in 1..=page_count {
            match self.process_page(source, page, &mut index) {
                PageOutcome::Skipped => {
                    skipped_so_far += 1;
                    observer.on_event(&IndexEvent::Skipped { page });
                }
                PageOutcome::NoText(warning) => {
                    observer.on_event(&IndexEvent::NoText(warning.clone()));
                    warnings.push(warning);
                }
                PageOutcome::Failed(failure) => {
                    observer.on_event(&IndexEvent::PageFailed(failure.clone()));
                    errors.push(failure);
                }
                // only pages that were actually searched report progress
                PageOutcome::Scanned => {
                    if page % self.progress_interval == 0 || page == page_count {
                        observer.on_event(&IndexEvent::Progress(ProgressSnapshot {
                            page,
                            page_count,
                            processed: page - skipped_so_far,
                            total_to_process,
                        }));
                    }
                }
            }
        }

        IndexRun {
            index: index.seal(),
            page_count,
            skipped,
            warnings,
            errors,
        }
    }

    fn process_page(
        &self,
        source: &dyn TextSource,
        page: u32,
        index: &mut IndexResult,
    ) -> PageOutcome {
        if self.skip.contains(&page) {
            return PageOutcome::Skipped;
        }

        let text = match source.page_text(page) {
            Ok(text) => text,
            Err(IndexerError::PageExtraction { message, .. }) => {
                return PageOutcome::Failed(PageError { page, message });
            }
            Err(e) => {
                return PageOutcome::Failed(PageError {
                    page,
                    message: e.to_string(),
                });
            }
        };

        if text.trim().is_empty() {
            return PageOutcome::NoText(PageWarning {
                page,
                message: format!("Page {} appears to have no extractable text", page),
            });
        }

        for keyword in self.keywords {
            if keyword.matches(&text) {
                index.record(keyword.as_str(), page);
            }
        }

        PageOutcome::Scanned
    }
}
