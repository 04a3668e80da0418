//! Injected progress and warning reporting
//!
//! The batch runner reports through this trait instead of a process-wide
//! logger, so library embedders decide where messages go.

use std::path::Path;
use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};

use crate::conversion::stats::BatchSummary;

/// Callbacks the batch runner emits while processing files
pub trait Reporter {
    fn batch_started(&self, _total: usize) {}

    /// Resolution produced no files; the run completes as a no-op
    fn batch_empty(&self, _source: &str, _filter: &str) {}

    fn file_converted(&self, _input: &Path, _output: &Path) {}

    fn file_skipped(&self, _input: &Path, _reason: &str) {}

    /// A tolerated per-file failure (only with continue-on-error)
    fn file_failed(&self, _input: &Path, _reason: &str) {}

    /// Malformed input bytes were replaced with U+FFFD
    fn file_lossy(&self, _input: &Path) {}

    fn batch_finished(&self, _summary: &BatchSummary) {}
}

/// Discards every report; default for library use
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Console reporter for the CLI: per-file ✓/✗ lines plus a progress bar
/// for multi-file batches
pub struct ConsoleReporter {
    quiet: bool,
    progress: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            progress: Mutex::new(None),
        }
    }

    fn with_progress(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.progress.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    fn println(&self, message: String) {
        let mut printed = false;
        if let Ok(guard) = self.progress.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.println(message.clone());
                printed = true;
            }
        }
        if !printed {
            println!("{}", message);
        }
    }
}

impl Reporter for ConsoleReporter {
    fn batch_started(&self, total: usize) {
        if self.quiet || total < 2 {
            return;
        }
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        if let Ok(mut guard) = self.progress.lock() {
            *guard = Some(pb);
        }
    }

    fn batch_empty(&self, source: &str, filter: &str) {
        if !self.quiet {
            eprintln!(
                "⚠ no files from source '{}' match filter '{}'; nothing to convert",
                source, filter
            );
        }
    }

    fn file_converted(&self, input: &Path, output: &Path) {
        if !self.quiet {
            self.println(format!("✓ {} -> {}", input.display(), output.display()));
        }
        self.with_progress(|pb| pb.inc(1));
    }

    fn file_skipped(&self, input: &Path, reason: &str) {
        if !self.quiet {
            eprintln!("⚠ skipped {}: {}", input.display(), reason);
        }
        self.with_progress(|pb| pb.inc(1));
    }

    fn file_failed(&self, input: &Path, reason: &str) {
        eprintln!("✗ {}: {}", input.display(), reason);
        self.with_progress(|pb| pb.inc(1));
    }

    fn file_lossy(&self, input: &Path) {
        if !self.quiet {
            eprintln!(
                "⚠ {}: malformed input replaced with U+FFFD",
                input.display()
            );
        }
    }

    fn batch_finished(&self, _summary: &BatchSummary) {
        self.with_progress(|pb| pb.finish_and_clear());
    }
}
