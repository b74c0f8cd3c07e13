// file: src/report/text.rs
// description: plain text rendering of the keyword index

use super::{KeywordReport, join_pages};
use std::fmt;

pub fn render(report: &KeywordReport) -> String {
    TextReport(report).to_string()
}

struct TextReport<'a>(&'a KeywordReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Keyword Index Results:")?;
        writeln!(f, "Document: {}", report.document.display())?;
        writeln!(f, "Total pages: {}", report.total_pages)?;
        if !report.pages_skipped.is_empty() {
            writeln!(f, "Pages skipped: {}", join_pages(&report.pages_skipped))?;
        }
        writeln!(f)?;

        if report.index.has_matches() {
            writeln!(f, "FOUND KEYWORDS:")?;
            for (keyword, pages) in report.index.found() {
                writeln!(f, "{}: {}", keyword, join_pages(pages))?;
            }
        } else {
            writeln!(f, "No matches found for any keywords.")?;
        }

        if !report.index.not_found().is_empty() {
            writeln!(f)?;
            writeln!(f, "NOT FOUND KEYWORDS:")?;
            for keyword in report.index.not_found() {
                writeln!(f, "{}", keyword)?;
            }
        }

        Ok(())
    }
}
