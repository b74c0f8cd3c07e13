// file: src/report/mod.rs
// description: keyword index report model, renderers, and output writer
// reference: internal module structure

pub mod json;
pub mod text;
mod writer;

pub use writer::ReportWriter;

use crate::error::Result;
use crate::indexer::{IndexRun, PageError, PageWarning, SealedIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_PATH: &str = "keywords_index.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

/// A sealed run bound to the document it was built from.
#[derive(Debug, Clone)]
pub struct KeywordReport {
    pub document: PathBuf,
    pub total_pages: u32,
    /// Skip list as configured, including entries past the last page.
    pub pages_skipped: Vec<u32>,
    pub index: SealedIndex,
    pub warnings: Vec<PageWarning>,
    pub errors: Vec<PageError>,
}

impl KeywordReport {
    pub fn new(document: &Path, skip: &BTreeSet<u32>, run: IndexRun) -> Self {
        Self {
            document: document.to_path_buf(),
            total_pages: run.page_count,
            pages_skipped: skip.iter().copied().collect(),
            index: run.index,
            warnings: run.warnings,
            errors: run.errors,
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(text::render(self)),
            ReportFormat::Json => json::render(self, true),
        }
    }
}

/// Joins page numbers the way every report line prints them.
pub(crate) fn join_pages<'a, I>(pages: I) -> String
where
    I: IntoIterator<Item = &'a u32>,
{
    pages
        .into_iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
