// file: src/indexer/events.rs
// description: per-page diagnostics, progress snapshots, and observers for indexing runs
// reference: tracing event logging

use serde::Serialize;
use std::fmt;
use tracing::{error, info, warn};

/// Position of a run at a progress checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    /// Page whose scan triggered the checkpoint.
    pub page: u32,
    pub page_count: u32,
    /// Pages visited so far minus pages skipped so far.
    pub processed: u32,
    /// Page count minus every skipped page within the document.
    pub total_to_process: u32,
}

impl ProgressSnapshot {
    /// Share of processable pages done. Reports 100% when nothing is left
    /// to process.
    pub fn percent(&self) -> f64 {
        if self.total_to_process == 0 {
            return 100.0;
        }
        self.processed as f64 / self.total_to_process as f64 * 100.0
    }
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} of {} pages ({:.1}%)",
            self.page,
            self.page_count,
            self.percent()
        )
    }
}

/// Expected condition: the page yielded no text (e.g. a scanned image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWarning {
    pub page: u32,
    pub message: String,
}

/// Recoverable extraction failure confined to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageError {
    pub page: u32,
    pub message: String,
}

impl fmt::Display for PageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing page {}: {}", self.page, self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndexEvent {
    Skipped { page: u32 },
    NoText(PageWarning),
    PageFailed(PageError),
    Progress(ProgressSnapshot),
}

pub trait IndexObserver {
    fn on_event(&mut self, event: &IndexEvent);
}

impl IndexObserver for Vec<IndexEvent> {
    fn on_event(&mut self, event: &IndexEvent) {
        self.push(event.clone());
    }
}

/// Writes every event to the tracing stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl IndexObserver for LogObserver {
    fn on_event(&mut self, event: &IndexEvent) {
        match event {
            IndexEvent::Skipped { page } => info!("Skipping page {} as requested", page),
            IndexEvent::NoText(warning) => warn!("{}", warning),
            IndexEvent::PageFailed(failure) => error!("{}", failure),
            IndexEvent::Progress(snapshot) => info!("{}", snapshot),
        }
    }
}
