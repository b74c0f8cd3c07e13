// file: src/indexer/keyword.rs
// description: compiled keyword patterns with whole-word, case-insensitive matching
// reference: https://docs.rs/regex

use crate::error::{IndexerError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// A search term compiled into a literal, boundary-anchored pattern.
///
/// Single-word keywords match as a whole word. Multi-word keywords match
/// their tokens in order, separated by any run of whitespace (spaces, tabs,
/// newlines), with a word boundary before the first token and after the last.
#[derive(Debug, Clone)]
pub struct Keyword {
    text: String,
    pattern: Regex,
}

impl Keyword {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IndexerError::Validation(
                "Keyword cannot be empty".to_string(),
            ));
        }

        let body = text
            .split_whitespace()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(r"\s+");

        let pattern = RegexBuilder::new(&format!(r"\b{}\b", body))
            .case_insensitive(true)
            .build()
            .map_err(|source| IndexerError::InvalidKeyword {
                keyword: text.to_string(),
                source,
            })?;

        Ok(Self {
            text: text.to_string(),
            pattern,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_multi_word(&self) -> bool {
        self.text.split_whitespace().nth(1).is_some()
    }

    /// Presence test only; the number of occurrences is irrelevant.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Keyword {}

/// Compiles keywords in input order, collapsing exact duplicates.
pub fn compile_keywords<I, S>(keywords: I) -> Result<Vec<Keyword>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut compiled = Vec::new();

    for raw in keywords {
        let keyword = Keyword::new(raw.as_ref())?;
        if !seen.insert(keyword.as_str().to_string()) {
            debug!("Ignoring duplicate keyword: {}", keyword);
            continue;
        }
        compiled.push(keyword);
    }

    Ok(compiled)
}
