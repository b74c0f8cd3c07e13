// file: tests/indexer_scenarios.rs
// description: keyword index behaviour over in-memory documents

use pdf_keyword_index::{
    IndexEvent, MemorySource, SealedIndex, TextSource, build_index, compile_keywords,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

fn scenario_pages() -> MemorySource {
    MemorySource::new([
        "Blockchain networks rely on consensus",
        "",
        "You want to search blockchain data",
    ])
}

fn found(index: &SealedIndex) -> BTreeMap<&str, Vec<u32>> {
    index
        .found()
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .collect()
}

#[test]
fn test_three_page_document() {
    let source = scenario_pages();
    let keywords = compile_keywords(["blockchain", "you want", "missing"]).unwrap();
    let mut events: Vec<IndexEvent> = Vec::new();

    let run = build_index(&source, &keywords, &BTreeSet::new(), &mut events);

    assert_eq!(
        found(&run.index),
        BTreeMap::from([("blockchain", vec![1, 3]), ("you want", vec![3])])
    );
    assert_eq!(run.index.not_found(), &["missing".to_string()]);
    assert_eq!(run.warnings.len(), 1);
    assert_eq!(run.warnings[0].page, 2);
    assert!(run.errors.is_empty());
    assert!(
        events
            .iter()
            .any(|e| matches!(e, IndexEvent::NoText(w) if w.page == 2))
    );
}

#[test]
fn test_three_page_document_skipping_first_page() {
    let source = scenario_pages();
    let keywords = compile_keywords(["blockchain", "you want", "missing"]).unwrap();
    let skip = BTreeSet::from([1]);
    let mut events: Vec<IndexEvent> = Vec::new();

    let run = build_index(&source, &keywords, &skip, &mut events);

    assert_eq!(
        found(&run.index),
        BTreeMap::from([("blockchain", vec![3]), ("you want", vec![3])])
    );
    assert_eq!(run.index.not_found(), &["missing".to_string()]);
    assert_eq!(run.skipped, vec![1]);
    assert!(events.contains(&IndexEvent::Skipped { page: 1 }));
}

/// Records which pages were asked for.
struct RecordingSource {
    inner: MemorySource,
    requested: RefCell<Vec<u32>>,
}

impl TextSource for RecordingSource {
    fn page_count(&self) -> u32 {
        self.inner.page_count()
    }

    fn page_text(&self, page: u32) -> pdf_keyword_index::Result<String> {
        self.requested.borrow_mut().push(page);
        self.inner.page_text(page)
    }
}

#[test]
fn test_skipped_pages_are_never_extracted() {
    let source = RecordingSource {
        inner: MemorySource::with_failures(vec![
            Ok("ledger".to_string()),
            Err("corrupt".to_string()),
            Ok("   ".to_string()),
            Ok("ledger".to_string()),
        ]),
        requested: RefCell::new(Vec::new()),
    };
    let keywords = compile_keywords(["ledger"]).unwrap();
    let skip = BTreeSet::from([2, 3, 4]);
    let mut events: Vec<IndexEvent> = Vec::new();

    let run = build_index(&source, &keywords, &skip, &mut events);

    assert_eq!(*source.requested.borrow(), vec![1]);
    assert_eq!(run.index.pages_for("ledger"), &[1]);
    assert!(run.warnings.is_empty());
    assert!(run.errors.is_empty());
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, IndexEvent::NoText(_) | IndexEvent::PageFailed(_)))
    );
}

#[test]
fn test_whitespace_page_is_warning_not_error() {
    let source = MemorySource::new(["  \n\t  ", "token"]);
    let keywords = compile_keywords(["token"]).unwrap();

    let run = build_index(&source, &keywords, &BTreeSet::new(), &mut Vec::<IndexEvent>::new());

    assert_eq!(run.index.pages_for("token"), &[2]);
    assert_eq!(run.warnings.len(), 1);
    assert!(run.errors.is_empty());
}

#[test]
fn test_build_index_is_idempotent() {
    let source = MemorySource::new([
        "Smart\ncontract audit",
        "category of cats",
        "A Cat sat on the smart   contract",
    ]);
    let keywords = compile_keywords(["cat", "smart contract", "audit"]).unwrap();
    let skip = BTreeSet::from([2]);

    let first = build_index(&source, &keywords, &skip, &mut Vec::<IndexEvent>::new());
    let second = build_index(&source, &keywords, &skip, &mut Vec::<IndexEvent>::new());

    assert_eq!(first, second);
    assert_eq!(first.index.pages_for("cat"), &[3]);
    assert_eq!(first.index.pages_for("smart contract"), &[1, 3]);
}

#[test]
fn test_partition_covers_every_keyword() {
    let pages: Vec<String> = (1..=40)
        .map(|n| match n % 4 {
            0 => format!("alpha beta page {}", n),
            1 => format!("gamma\n\ndelta page {}", n),
            2 => String::new(),
            _ => "ALPHA".to_string(),
        })
        .collect();
    let source = MemorySource::new(pages);
    let raw = ["alpha", "gamma delta", "epsilon", "beta", "page"];
    let keywords = compile_keywords(raw).unwrap();
    let skip = BTreeSet::from([3, 7, 8, 21]);

    let run = build_index(&source, &keywords, &skip, &mut Vec::<IndexEvent>::new());
    let index = &run.index;

    let mut all: Vec<&str> = index.found().keys().map(String::as_str).collect();
    all.extend(index.not_found().iter().map(String::as_str));
    all.sort_unstable();
    let mut expected = raw.to_vec();
    expected.sort_unstable();
    assert_eq!(all, expected);

    for (keyword, pages) in index.found() {
        assert!(!pages.is_empty(), "{} has an empty page list", keyword);
        assert!(pages.windows(2).all(|w| w[0] < w[1]), "{} not ascending", keyword);
        assert!(pages.iter().all(|p| !skip.contains(p)), "{} hit a skipped page", keyword);
        assert!(!index.not_found().contains(keyword));
    }
    assert_eq!(index.not_found(), &["epsilon".to_string()]);
}
