//! Run configuration and pre-run validation
//!
//! Raw settings arrive as strings (CLI flags or host configuration) and are
//! turned into a validated [`ConversionRequest`]. Validation collects every
//! failure instead of stopping at the first one, and tags each with a stable
//! field identifier so a host UI can attribute it to the originating setting.

use std::fmt;
use std::path::PathBuf;

use encoding_rs::Encoding;

/// Stable field identifiers for validation failures
pub const SOURCE_PATH: &str = "source_path";
pub const DEST_PATH: &str = "dest_path";
pub const FILE_FILTER: &str = "file_filter";
pub const SOURCE_CHARSET: &str = "source_charset";

/// Default file-name filter: accept every name
pub const MATCH_ALL_FILTER: &str = ".*";

/// A single validation failure, attributable to one setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ordered collection of validation failures for one settings instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.failures.push(ValidationFailure::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// The first failure attributed to `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&ValidationFailure> {
        self.failures.iter().find(|f| f.field == field)
    }
}

impl From<Vec<ValidationFailure>> for ValidationReport {
    fn from(failures: Vec<ValidationFailure>) -> Self {
        Self { failures }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.failures {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", failure.field, failure.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw, unvalidated settings as supplied by the CLI or a host configuration
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Source location: a file, a directory, or a glob pattern such as `*.dat`
    pub source_path: String,
    /// Destination file or directory
    pub dest_path: String,
    /// Regular expression matched against candidate file names, e.g. `.*\.txt`
    pub file_filter: Option<String>,
    /// Label of the charset the source files are encoded in
    pub source_charset: String,
    /// Keep converting remaining files when one file fails
    pub continue_on_error: bool,
}

impl Settings {
    /// Validate all settings, collecting every failure
    pub fn validate(&self) -> Result<ConversionRequest, ValidationReport> {
        let mut report = ValidationReport::default();

        if self.source_path.trim().is_empty() {
            report.add(SOURCE_PATH, "source file or folder is required");
        }
        if self.dest_path.trim().is_empty() {
            report.add(DEST_PATH, "destination file or folder is required");
        }
        if let Some(pattern) = &self.file_filter {
            if let Err(e) = regex::Regex::new(pattern) {
                report.add(FILE_FILTER, format!("not a valid regular expression: {e}"));
            }
        }
        let source_charset = Encoding::for_label(self.source_charset.trim().as_bytes());
        if source_charset.is_none() {
            report.add(
                SOURCE_CHARSET,
                format!("unknown charset label '{}'", self.source_charset),
            );
        }

        match source_charset {
            Some(source_charset) if report.is_empty() => Ok(ConversionRequest {
                source_path: self.source_path.clone(),
                dest_path: PathBuf::from(&self.dest_path),
                file_filter: self.file_filter.clone(),
                source_charset,
                continue_on_error: self.continue_on_error,
            }),
            _ => Err(report),
        }
    }
}

/// Immutable, validated parameters for one conversion run
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_path: String,
    pub dest_path: PathBuf,
    /// Validated regex source; `None` means match every file name
    pub file_filter: Option<String>,
    pub source_charset: &'static Encoding,
    pub continue_on_error: bool,
}

impl ConversionRequest {
    /// The filter pattern that will be applied during resolution
    pub fn filter_pattern(&self) -> &str {
        self.file_filter.as_deref().unwrap_or(MATCH_ALL_FILTER)
    }
}
