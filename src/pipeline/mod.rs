// file: src/pipeline/mod.rs
// description: end-to-end run orchestration and progress reporting
// reference: pipeline orchestration

mod progress;
mod runner;

pub use progress::{ProgressTracker, ScanStats};
pub use runner::{RunOptions, RunSummary, run, run_with_source};
