// file: src/utils/validation.rs
// description: input validation and parsing helpers
// reference: input validation patterns

use crate::error::{IndexerError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

lazy_static! {
    static ref PAGE_ITEM: Regex =
        Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").expect("PAGE_ITEM regex is valid");
}

pub struct Validator;

impl Validator {
    /// Fails with `DocumentNotFound` when nothing exists at `path`.
    pub fn validate_document_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IndexerError::DocumentNotFound(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(IndexerError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            warn!("{} does not have a .pdf extension", path.display());
        }

        Ok(())
    }

    /// Parses `"1, 5, 37-99"` into a set of 1-based page numbers.
    pub fn parse_page_spec(spec: &str) -> Result<BTreeSet<u32>> {
        let mut pages = BTreeSet::new();

        for item in spec.split(',').filter(|item| !item.trim().is_empty()) {
            let captures = PAGE_ITEM.captures(item).ok_or_else(|| {
                IndexerError::Validation(format!("Invalid page entry '{}'", item.trim()))
            })?;

            let start = parse_page_number(&captures[1])?;
            let end = match captures.get(2) {
                Some(end) => parse_page_number(end.as_str())?,
                None => start,
            };

            if end < start {
                return Err(IndexerError::Validation(format!(
                    "Page range {}-{} is reversed",
                    start, end
                )));
            }

            pages.extend(start..=end);
        }

        Ok(pages)
    }

    /// Splits a comma-separated keyword list, dropping empty entries.
    pub fn parse_keyword_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// One keyword per line; blank lines and `#` comments are ignored.
    pub fn parse_keyword_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

fn parse_page_number(raw: &str) -> Result<u32> {
    let page: u32 = raw
        .parse()
        .map_err(|_| IndexerError::Validation(format!("Page number out of range: {}", raw)))?;

    if page == 0 {
        return Err(IndexerError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_document_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("book.pdf");
        fs::write(&file_path, "%PDF-1.5").unwrap();

        assert!(Validator::validate_document_path(&file_path).is_ok());
        assert!(matches!(
            Validator::validate_document_path(&temp.path().join("missing.pdf")),
            Err(IndexerError::DocumentNotFound(_))
        ));
        assert!(matches!(
            Validator::validate_document_path(temp.path()),
            Err(IndexerError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_page_spec() {
        let pages = Validator::parse_page_spec("1, 5,9-11 ,5").unwrap();
        assert_eq!(pages.into_iter().collect::<Vec<_>>(), vec![1, 5, 9, 10, 11]);

        assert!(Validator::parse_page_spec("").unwrap().is_empty());
        assert!(Validator::parse_page_spec(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_page_spec_rejects_invalid() {
        assert!(Validator::parse_page_spec("0").is_err());
        assert!(Validator::parse_page_spec("12-4").is_err());
        assert!(Validator::parse_page_spec("three").is_err());
        assert!(Validator::parse_page_spec("1-2-3").is_err());
        assert!(Validator::parse_page_spec("99999999999").is_err());
    }

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            Validator::parse_keyword_list("blockchain, you want,, missing "),
            vec!["blockchain", "you want", "missing"]
        );
    }

    #[test]
    fn test_parse_keyword_lines() {
        let content = "# heading\nledger\n  \n  smart contract  \n#skip\n";
        assert_eq!(
            Validator::parse_keyword_lines(content),
            vec!["ledger", "smart contract"]
        );
    }
}
