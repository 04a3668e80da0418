//! Source path resolution
//!
//! Turns a source specification (an existing file, a directory, or a glob
//! pattern) into the ordered list of concrete input files, classified as
//! single-file or expanded mode. Expanded mode applies the file-name filter;
//! a directly named file is always converted regardless of the filter.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::MATCH_ALL_FILTER;
use crate::error::{ConvertError, ConvertResult};
use crate::fs::FileSystem;

/// How the source specification was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// The source path named one existing regular file
    SingleFile,
    /// The source path was expanded as a directory or glob pattern
    Expanded,
}

/// One concrete input file produced by resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    /// Discovered via directory/glob expansion; affects destination naming
    pub expanded: bool,
}

/// The full result of resolving a source specification
#[derive(Debug, Clone)]
pub struct Resolution {
    pub mode: ResolveMode,
    pub files: Vec<ResolvedFile>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Resolve `source_path` into concrete input files.
///
/// An empty result is not an error: a glob that matches nothing produces a
/// no-op batch. A literal path that does not exist is `SourceUnreadable`.
pub fn resolve(
    fs: &dyn FileSystem,
    source_path: &str,
    filter_pattern: Option<&str>,
) -> ConvertResult<Resolution> {
    let pattern = filter_pattern.unwrap_or(MATCH_ALL_FILTER);
    let filter = compile_name_filter(pattern)?;

    let source = Path::new(source_path);
    if fs.is_file(source) {
        return Ok(Resolution {
            mode: ResolveMode::SingleFile,
            files: vec![ResolvedFile {
                path: source.to_path_buf(),
                expanded: false,
            }],
        });
    }

    let mut candidates: Vec<PathBuf> = fs
        .glob(source_path)
        .map_err(|e| ConvertError::source_unreadable(source_path, e.to_string()))?
        .into_iter()
        .filter(|p| name_matches(&filter, p))
        .collect();

    // Not every glob implementation treats a bare directory path as "list
    // its children"; retry with a plain listing in that case.
    if candidates.is_empty() || (candidates.len() == 1 && fs.is_dir(&candidates[0])) {
        let dir = candidates.pop().unwrap_or_else(|| source.to_path_buf());
        if fs.is_dir(&dir) {
            candidates = fs
                .list_dir(&dir)
                .map_err(|e| ConvertError::source_unreadable(source_path, e.to_string()))?
                .into_iter()
                .filter(|p| name_matches(&filter, p))
                .collect();
        } else if has_glob_meta(source_path) {
            // Pattern matched nothing: a no-op batch, not an error
            candidates = Vec::new();
        } else {
            return Err(ConvertError::source_unreadable(
                source_path,
                "no such file or directory",
            ));
        }
    }

    // Matched directories are excluded from conversion but are not an error
    let files = candidates
        .into_iter()
        .filter(|p| fs.is_file(p))
        .map(|path| ResolvedFile {
            path,
            expanded: true,
        })
        .collect();

    Ok(Resolution {
        mode: ResolveMode::Expanded,
        files,
    })
}

/// Compile the filter so it must match the entire file name
fn compile_name_filter(pattern: &str) -> ConvertResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$"))
        .map_err(|e| ConvertError::filter_pattern_invalid(pattern, &e))
}

fn name_matches(filter: &Regex, path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| filter.is_match(name))
}

fn has_glob_meta(path: &str) -> bool {
    path.contains(['*', '?', '['])
}
