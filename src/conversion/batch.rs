//! Batch orchestration: destination derivation, failure policy, aggregation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ConversionRequest;
use crate::conversion::engine::{ConversionEngine, TranscodeStats};
use crate::conversion::stats::BatchSummary;
use crate::error::{ConvertError, ConvertResult};
use crate::fs::FileSystem;
use crate::report::Reporter;
use crate::resolver::{self, ResolveMode, Resolution};

/// Extension appended to the input file name when the destination is a directory
pub const UTF8_EXTENSION: &str = "utf8";

/// Final state of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionStatus {
    Converted(TranscodeStats),
    /// Not converted, not an error (e.g. vanished between resolve and convert)
    Skipped { reason: String },
    /// A tolerated failure; only recorded when continue-on-error is set
    Failed { reason: String },
}

/// Per-file result of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: ConversionStatus,
}

/// Aggregate result of a completed batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub outcomes: Vec<ConversionOutcome>,
    pub summary: BatchSummary,
}

/// Run one conversion batch: resolve inputs, derive destinations, convert
/// files in resolver order.
///
/// Configuration and pre-flight errors abort before any file is touched.
/// Per-file failures abort the batch unless the request tolerates them.
pub fn run(
    request: &ConversionRequest,
    fs: &dyn FileSystem,
    reporter: &dyn Reporter,
) -> ConvertResult<BatchResult> {
    let started = Instant::now();
    let resolution = resolver::resolve(fs, &request.source_path, request.file_filter.as_deref())?;

    if resolution.is_empty() {
        reporter.batch_empty(&request.source_path, request.filter_pattern());
        let summary = BatchSummary::from_outcomes(0, &[], started.elapsed());
        reporter.batch_finished(&summary);
        return Ok(BatchResult {
            outcomes: Vec::new(),
            summary,
        });
    }

    let dest_is_dir = prepare_destination(fs, request, &resolution)?;
    reporter.batch_started(resolution.len());

    let engine = ConversionEngine::new(fs, request.source_charset);
    let mut outcomes = Vec::with_capacity(resolution.len());

    for file in &resolution.files {
        let output = output_path(&request.dest_path, &file.path, dest_is_dir);

        // A resolved entry can stop being a regular file before we reach it
        if !fs.is_file(&file.path) {
            let reason = "not a regular file".to_string();
            reporter.file_skipped(&file.path, &reason);
            outcomes.push(ConversionOutcome {
                input: file.path.clone(),
                output,
                status: ConversionStatus::Skipped { reason },
            });
            continue;
        }

        match engine.convert_file(&file.path, &output) {
            Ok(stats) => {
                if stats.lossy {
                    reporter.file_lossy(&file.path);
                }
                reporter.file_converted(&file.path, &output);
                outcomes.push(ConversionOutcome {
                    input: file.path.clone(),
                    output,
                    status: ConversionStatus::Converted(stats),
                });
            }
            Err(e) if request.continue_on_error => {
                let reason = e.to_string();
                reporter.file_failed(&file.path, &reason);
                outcomes.push(ConversionOutcome {
                    input: file.path.clone(),
                    output,
                    status: ConversionStatus::Failed { reason },
                });
            }
            Err(e) => {
                return Err(ConvertError::FileConversionFailed {
                    input: file.path.clone(),
                    output,
                    source: e,
                });
            }
        }
    }

    let summary = BatchSummary::from_outcomes(resolution.len(), &outcomes, started.elapsed());
    reporter.batch_finished(&summary);
    Ok(BatchResult { outcomes, summary })
}

/// Ensure the destination (or its parent) exists. Returns true when outputs
/// are named `dest/<input_file_name>.utf8`.
fn prepare_destination(
    fs: &dyn FileSystem,
    request: &ConversionRequest,
    resolution: &Resolution,
) -> ConvertResult<bool> {
    let dest = &request.dest_path;
    match resolution.mode {
        ResolveMode::SingleFile => {
            if fs.is_dir(dest) {
                return Ok(true);
            }
            if let Some(parent) = dest.parent() {
                if !parent.as_os_str().is_empty() {
                    fs.create_dir_all(parent)
                        .map_err(|e| ConvertError::DestinationUnwritable {
                            path: dest.clone(),
                            source: e,
                        })?;
                }
            }
            Ok(false)
        }
        // Expanded mode always materializes the destination as a directory;
        // an expanded source must never collapse into a single output file.
        ResolveMode::Expanded => {
            if fs.exists(dest) && !fs.is_dir(dest) {
                return Err(ConvertError::DestinationConflict { path: dest.clone() });
            }
            fs.create_dir_all(dest)
                .map_err(|e| ConvertError::DestinationUnwritable {
                    path: dest.clone(),
                    source: e,
                })?;
            Ok(true)
        }
    }
}

fn output_path(dest: &Path, input: &Path, dest_is_dir: bool) -> PathBuf {
    if dest_is_dir {
        let mut name = input
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("output"));
        name.push(".");
        name.push(UTF8_EXTENSION);
        dest.join(name)
    } else {
        dest.to_path_buf()
    }
}
