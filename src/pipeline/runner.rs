// file: src/pipeline/runner.rs
// description: resolves run options and drives a full document indexing run
// reference: application bootstrap and orchestration

use super::progress::{ProgressTracker, ScanStats};
use crate::config::Config;
use crate::error::{IndexerError, Result};
use crate::indexer::{IndexBuilder, compile_keywords};
use crate::report::{KeywordReport, ReportFormat, ReportWriter, join_pages};
use crate::source::{PdfSource, TextSource};
use crate::utils::Validator;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fully resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub document: PathBuf,
    pub keywords: Vec<String>,
    pub skip: BTreeSet<u32>,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub progress_interval: u32,
    pub progress_bar: bool,
    pub colored: bool,
}

impl RunOptions {
    /// Checks the document first so a missing file fails before anything else.
    pub fn from_config(config: &Config) -> Result<Self> {
        let document = config.document.path.clone().ok_or_else(|| {
            IndexerError::Config("No document given; pass a PDF path".to_string())
        })?;
        Validator::validate_document_path(&document)?;

        Ok(Self {
            document,
            keywords: config.resolve_keywords()?,
            skip: Validator::parse_page_spec(&config.index.skip_pages)?,
            output: config.output.path.clone(),
            format: config.output.format,
            progress_interval: config.index.progress_interval,
            progress_bar: false,
            colored: true,
        })
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub total_keywords: usize,
    pub found: usize,
    pub not_found: usize,
    pub page_warnings: usize,
    pub page_errors: usize,
    pub stats: ScanStats,
}

/// Opens the document, indexes it, and writes the report.
///
/// Nothing is written unless the whole scan completes.
pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let source = PdfSource::open(&options.document)?;
    run_with_source(options, &source)
}

pub fn run_with_source(options: &RunOptions, source: &dyn TextSource) -> Result<RunSummary> {
    let keywords = compile_keywords(&options.keywords)?;
    let page_count = source.page_count();

    info!("Successfully opened PDF with {} pages.", page_count);
    if !options.skip.is_empty() {
        info!("Skipping pages: {}", join_pages(&options.skip));
    }

    let mut tracker = if options.progress_bar {
        ProgressTracker::with_color(page_count, options.colored)
    } else {
        ProgressTracker::hidden()
    };

    let run = IndexBuilder::new(&keywords, &options.skip)
        .with_progress_interval(options.progress_interval)
        .build(source, &mut tracker);
    tracker.finish();
    let stats = ScanStats::from_run(&run, tracker.elapsed_secs());

    let report = KeywordReport::new(&options.document, &options.skip, run);
    let rendered = report.render(options.format)?;
    write_report(&options.output, &rendered)?;

    Ok(RunSummary {
        output: options.output.clone(),
        total_keywords: report.index.keyword_count(),
        found: report.index.found().len(),
        not_found: report.index.not_found().len(),
        page_warnings: report.warnings.len(),
        page_errors: report.errors.len(),
        stats,
    })
}

fn write_report(path: &Path, rendered: &str) -> Result<()> {
    ReportWriter::new(path).write(rendered)
}
