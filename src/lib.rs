// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod indexer;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod utils;

pub use config::{Config, DocumentConfig, IndexConfig, OutputConfig};
pub use error::{IndexerError, Result};
pub use indexer::{
    IndexBuilder, IndexEvent, IndexObserver, IndexResult, IndexRun, Keyword, LogObserver,
    PageError, PageWarning, ProgressSnapshot, SealedIndex, build_index, compile_keywords,
};
pub use pipeline::{ProgressTracker, RunOptions, RunSummary, ScanStats};
pub use report::{KeywordReport, ReportFormat, ReportWriter};
pub use source::{MemorySource, PdfSource, TextSource};
pub use utils::Validator;
