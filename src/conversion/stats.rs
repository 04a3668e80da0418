//! Per-run statistics aggregated from file outcomes

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::conversion::batch::{ConversionOutcome, ConversionStatus};

/// Summary of one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Files the resolver produced (regular files only)
    pub files_resolved: usize,
    pub files_converted: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Files where malformed input was replaced with U+FFFD
    pub files_lossy: usize,
    pub elapsed_ms: u64,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

impl BatchSummary {
    pub fn from_outcomes(
        files_resolved: usize,
        outcomes: &[ConversionOutcome],
        elapsed: Duration,
    ) -> Self {
        let mut summary = Self {
            files_resolved,
            files_converted: 0,
            files_skipped: 0,
            files_failed: 0,
            bytes_read: 0,
            bytes_written: 0,
            files_lossy: 0,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            completed_at: chrono::Utc::now(),
        };

        for outcome in outcomes {
            match &outcome.status {
                ConversionStatus::Converted(stats) => {
                    summary.files_converted += 1;
                    summary.bytes_read += stats.bytes_read;
                    summary.bytes_written += stats.bytes_written;
                    if stats.lossy {
                        summary.files_lossy += 1;
                    }
                }
                ConversionStatus::Skipped { .. } => summary.files_skipped += 1,
                ConversionStatus::Failed { .. } => summary.files_failed += 1,
            }
        }

        summary
    }

    /// True when no tolerated failures were recorded
    pub fn is_clean(&self) -> bool {
        self.files_failed == 0
    }

    /// Machine-readable form of the summary
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
