//! Error types and handling infrastructure for charset conversion

use std::io;
use std::path::PathBuf;

use crate::config::ValidationReport;

/// Main error type for conversion runs
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Raw settings failed validation before the run started
    #[error("invalid configuration: {0}")]
    Configuration(ValidationReport),

    /// The file-name filter does not compile as a regular expression
    #[error("invalid file filter pattern '{pattern}': {message}")]
    FilterPatternInvalid { pattern: String, message: String },

    /// The source path does not exist or cannot be listed
    #[error("source path '{path}' cannot be read: {message}")]
    SourceUnreadable { path: String, message: String },

    /// A multi-file batch targets an existing non-directory destination
    #[error(
        "destination '{}' must be a directory since the source resolves to multiple files",
        path.display()
    )]
    DestinationConflict { path: PathBuf },

    /// The destination directory could not be created
    #[error("failed to prepare destination '{}': {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading or writing a single file failed
    #[error("failed to convert '{}' to '{}': {source}", input.display(), output.display())]
    FileConversionFailed {
        input: PathBuf,
        output: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub fn filter_pattern_invalid(pattern: &str, error: &regex::Error) -> Self {
        Self::FilterPatternInvalid {
            pattern: pattern.to_string(),
            message: error.to_string(),
        }
    }

    pub fn source_unreadable(path: &str, message: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(report) => {
                let mut lines = vec!["invalid configuration:".to_string()];
                for failure in report.failures() {
                    lines.push(format!("  {}: {}", failure.field, failure.message));
                }
                lines.join("\n")
            }
            other => other.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
