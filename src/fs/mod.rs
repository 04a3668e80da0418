//! Filesystem capability consumed by the resolver and the conversion engine

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// The filesystem operations the conversion pipeline needs.
///
/// [`LocalFs`] implements this against the local disk; tests substitute
/// wrappers that inject failures without touching the pipeline itself.
pub trait FileSystem {
    /// True if `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// True if `path` exists and is a directory
    fn is_dir(&self, path: &Path) -> bool;

    fn exists(&self, path: &Path) -> bool;

    /// Non-recursive listing of a directory's entries
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Expand a glob pattern against the filesystem
    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>>;

    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Open `path` for reading as a byte stream
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>>;

    /// Create (or truncate) `path` for writing
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>>;
}

/// Local-disk implementation of [`FileSystem`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }

    fn glob(&self, pattern: &str) -> io::Result<Vec<PathBuf>> {
        let paths = glob::glob(pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        // glob yields matches in alphabetical order
        let mut matches = Vec::new();
        for path in paths {
            matches.push(path.map_err(|e| e.into_error())?);
        }
        Ok(matches)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read>> {
        Ok(Box::new(File::open(path)?))
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write>> {
        Ok(Box::new(File::create(path)?))
    }
}
