//! utf8conv
//!
//! Converts one or more files from a configured source charset into UTF-8.
//! The source may be a single file, a directory (optionally filtered by a
//! file-name regex), or a glob pattern; the destination is a file or a
//! directory where each output is named `<input_file_name>.utf8`.

pub mod cli;
pub mod config;
pub mod conversion;
pub mod error;
pub mod fs;
pub mod report;
pub mod resolver;

// Re-export commonly used types
pub use config::{ConversionRequest, Settings, ValidationFailure, ValidationReport};
pub use conversion::{BatchResult, BatchSummary, ConversionOutcome, ConversionStatus};
pub use error::{ConvertError, ConvertResult};
pub use fs::{FileSystem, LocalFs};
pub use report::{ConsoleReporter, NullReporter, Reporter};
pub use resolver::{Resolution, ResolveMode, ResolvedFile};

/// Run a conversion batch against the local filesystem without reporting
pub fn run(request: &ConversionRequest) -> ConvertResult<BatchResult> {
    conversion::run(request, &LocalFs, &NullReporter)
}

/// Validate raw settings and run the batch in one step
pub fn run_settings(settings: &Settings) -> ConvertResult<BatchResult> {
    let request = settings.validate().map_err(ConvertError::Configuration)?;
    run(&request)
}
