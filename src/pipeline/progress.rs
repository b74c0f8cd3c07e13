// file: src/pipeline/progress.rs
// description: progress bar and statistics reporting for an indexing run
// reference: uses indicatif for progress bars and tracks page metrics

use crate::indexer::{IndexEvent, IndexObserver, IndexRun, LogObserver, PageError, PageWarning};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanStats {
    /// Pages whose text was searched for keywords.
    pub pages_scanned: usize,
    pub pages_skipped: usize,
    pub pages_without_text: usize,
    pub pages_failed: usize,
    pub duration_secs: f64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_run(run: &IndexRun, duration_secs: f64) -> Self {
        let attempted = run.pages_scanned() as usize;
        Self {
            pages_scanned: attempted.saturating_sub(run.warnings.len() + run.errors.len()),
            pages_skipped: run.skipped.len(),
            pages_without_text: run.warnings.len(),
            pages_failed: run.errors.len(),
            duration_secs,
        }
    }

    pub fn pages_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.pages_scanned as f64 / self.duration_secs
    }

    /// Share of attempted pages that extracted without error.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_scanned + self.pages_without_text + self.pages_failed;
        if attempted == 0 {
            return 0.0;
        }
        ((self.pages_scanned + self.pages_without_text) as f64 / attempted as f64) * 100.0
    }

    fn record(&mut self, event: &IndexEvent) {
        match event {
            IndexEvent::Skipped { .. } => self.pages_skipped += 1,
            IndexEvent::NoText(_) => self.pages_without_text += 1,
            IndexEvent::PageFailed(_) => self.pages_failed += 1,
            IndexEvent::Progress(_) => {}
        }
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scanned {} pages ({} skipped, {} without text, {} failed) in {:.2}s, \
             {:.2} pages/sec, success rate {:.2}%",
            self.pages_scanned,
            self.pages_skipped,
            self.pages_without_text,
            self.pages_failed,
            self.duration_secs,
            self.pages_per_second(),
            self.success_rate()
        )
    }
}

/// Observer that drives a terminal progress bar with per-page counters.
///
/// Log lines are still emitted for every event; the bar is suspended while
/// they are written so the two do not interleave.
pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    counts: ScanStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_pages: u32, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_pages as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            counts: ScanStats::new(),
            start_time: Instant::now(),
        }
    }

    /// Counter-only tracker with no terminal output.
    pub fn hidden() -> Self {
        Self {
            main_bar: ProgressBar::hidden(),
            detail_bar: ProgressBar::hidden(),
            counts: ScanStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Indexing complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    fn update_detail_bar(&self) {
        let message = format!(
            "Skipped: {} | No text: {} | Failed: {}",
            self.counts.pages_skipped, self.counts.pages_without_text, self.counts.pages_failed
        );

        self.detail_bar.set_message(message);
    }
}

impl IndexObserver for ProgressTracker {
    fn on_event(&mut self, event: &IndexEvent) {
        self.main_bar.suspend(|| LogObserver.on_event(event));

        match event {
            IndexEvent::Progress(snapshot) => {
                self.main_bar.set_position(snapshot.page as u64);
            }
            IndexEvent::Skipped { page }
            | IndexEvent::NoText(PageWarning { page, .. })
            | IndexEvent::PageFailed(PageError { page, .. }) => {
                self.main_bar.set_position(*page as u64);
                self.counts.record(event);
                self.update_detail_bar();
            }
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages ({eta}) {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} pages ({eta}) {msg}"
    };
    let chars = if colored { "█▓▒░" } else { "=>-" };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(chars));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::{ProgressSnapshot, build_index, compile_keywords};
    use crate::source::MemorySource;
    use std::collections::BTreeSet;

    #[test]
    fn test_scan_stats_calculations() {
        let mut stats = ScanStats::new();
        stats.pages_scanned = 90;
        stats.pages_without_text = 0;
        stats.pages_failed = 10;
        stats.duration_secs = 10.0;

        assert_eq!(stats.pages_per_second(), 9.0);
        assert_eq!(stats.success_rate(), 90.0);
    }

    #[test]
    fn test_scan_stats_zero_duration() {
        let stats = ScanStats::new();
        assert_eq!(stats.pages_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_tracker_counts_events() {
        let mut tracker = ProgressTracker::hidden();

        tracker.on_event(&IndexEvent::Skipped { page: 1 });
        tracker.on_event(&IndexEvent::NoText(PageWarning {
            page: 2,
            message: "Page 2 appears to have no extractable text".to_string(),
        }));
        tracker.on_event(&IndexEvent::PageFailed(PageError {
            page: 3,
            message: "bad stream".to_string(),
        }));
        tracker.on_event(&IndexEvent::Progress(ProgressSnapshot {
            page: 3,
            page_count: 3,
            processed: 2,
            total_to_process: 2,
        }));

        assert_eq!(tracker.counts.pages_skipped, 1);
        assert_eq!(tracker.counts.pages_without_text, 1);
        assert_eq!(tracker.counts.pages_failed, 1);
        assert_eq!(tracker.main_bar.position(), 3);
    }

    #[test]
    fn test_stats_from_run() {
        let source = MemorySource::with_failures(vec![
            Ok("audit trail".to_string()),
            Ok(String::new()),
            Err("bad stream".to_string()),
            Ok("audit log".to_string()),
            Ok("skipped".to_string()),
        ]);
        let keywords = compile_keywords(["audit"]).unwrap();
        let skip = BTreeSet::from([5, 9]);
        let run = build_index(&source, &keywords, &skip, &mut Vec::<IndexEvent>::new());

        let stats = ScanStats::from_run(&run, 2.0);
        assert_eq!(stats.pages_scanned, 2);
        assert_eq!(stats.pages_skipped, 1);
        assert_eq!(stats.pages_without_text, 1);
        assert_eq!(stats.pages_failed, 1);
        assert_eq!(stats.pages_per_second(), 1.0);
        assert!((stats.success_rate() - 75.0).abs() < f64::EPSILON);
        assert_eq!(
            stats.to_string(),
            "Scanned 2 pages (1 skipped, 1 without text, 1 failed) in 2.00s, \
             1.00 pages/sec, success rate 75.00%"
        );
    }
}
