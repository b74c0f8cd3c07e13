// file: src/report/json.rs
// description: json rendering of the keyword index
// reference: https://docs.rs/serde_json

use super::KeywordReport;
use crate::error::Result;
use crate::indexer::{PageError, PageWarning};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub document: String,
    pub total_pages: u32,
    pub pages_skipped: &'a [u32],
    pub found: &'a BTreeMap<String, Vec<u32>>,
    pub not_found: &'a [String],
    pub warnings: &'a [PageWarning],
    pub errors: &'a [PageError],
    pub generated_at: String,
}

impl<'a> ExportedReport<'a> {
    pub fn from_report(report: &'a KeywordReport) -> Self {
        Self {
            document: report.document.display().to_string(),
            total_pages: report.total_pages,
            pages_skipped: &report.pages_skipped,
            found: report.index.found(),
            not_found: report.index.not_found(),
            warnings: &report.warnings,
            errors: &report.errors,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

pub fn render(report: &KeywordReport, pretty: bool) -> Result<String> {
    let exported = ExportedReport::from_report(report);
    let mut json = if pretty {
        serde_json::to_string_pretty(&exported)?
    } else {
        serde_json::to_string(&exported)?
    };
    json.push('\n');
    Ok(json)
}
