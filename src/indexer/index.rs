// file: src/indexer/index.rs
// description: keyword to page accumulator and its sealed, partitioned form
// reference: internal data structures

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Mutable accumulator owned by a single indexing run.
#[derive(Debug, Clone, Default)]
pub struct IndexResult {
    pages: BTreeMap<String, Vec<u32>>,
}

impl IndexResult {
    pub fn new<'a, I>(keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pages = keywords
            .into_iter()
            .map(|keyword| (keyword.to_string(), Vec::new()))
            .collect();
        Self { pages }
    }

    pub fn record(&mut self, keyword: &str, page: u32) {
        self.pages.entry(keyword.to_string()).or_default().push(page);
    }

    /// Deduplicates and sorts every page list, then splits keywords into
    /// found and not found. Consumes the accumulator.
    pub fn seal(self) -> SealedIndex {
        let mut found = BTreeMap::new();
        let mut not_found = Vec::new();

        for (keyword, pages) in self.pages {
            let pages: Vec<u32> = pages
                .into_iter()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            if pages.is_empty() {
                not_found.push(keyword);
            } else {
                found.insert(keyword, pages);
            }
        }

        SealedIndex { found, not_found }
    }
}

/// Immutable result of an indexing run. Both partitions are ordered by keyword.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SealedIndex {
    found: BTreeMap<String, Vec<u32>>,
    not_found: Vec<String>,
}

impl SealedIndex {
    pub fn found(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.found
    }

    pub fn not_found(&self) -> &[String] {
        &self.not_found
    }

    pub fn keyword_count(&self) -> usize {
        self.found.len() + self.not_found.len()
    }

    pub fn has_matches(&self) -> bool {
        !self.found.is_empty()
    }

    pub fn pages_for(&self, keyword: &str) -> &[u32] {
        self.found.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }
}
