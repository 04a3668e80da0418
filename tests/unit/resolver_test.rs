use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tempfile::tempdir;

use utf8conv::fs::LocalFs;
use utf8conv::resolver::{resolve, ResolveMode};
use utf8conv::ConvertError;

fn touch(path: &Path, content: &str) {
    let mut f = File::create(path).unwrap();
    write!(f, "{}", content).unwrap();
}

#[test]
fn test_single_file_resolves_to_itself() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("x.dat");
    touch(&file, "payload");

    let resolution = resolve(&LocalFs, file.to_str().unwrap(), None).unwrap();
    assert_eq!(resolution.mode, ResolveMode::SingleFile);
    assert_eq!(resolution.len(), 1);
    assert_eq!(resolution.files[0].path, file);
    assert!(!resolution.files[0].expanded);
}

#[test]
fn test_single_file_ignores_filter() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("x.dat");
    touch(&file, "payload");

    // The filter would reject this name, but a directly named file is
    // always converted.
    let resolution = resolve(&LocalFs, file.to_str().unwrap(), Some(r".*\.txt")).unwrap();
    assert_eq!(resolution.mode, ResolveMode::SingleFile);
    assert_eq!(resolution.len(), 1);
}

#[test]
fn test_directory_listing_applies_filter() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.dat"), "a");
    touch(&tmp.path().join("b.dat"), "b");
    touch(&tmp.path().join("c.txt"), "c");

    let resolution = resolve(&LocalFs, tmp.path().to_str().unwrap(), Some(r".*\.dat")).unwrap();
    assert_eq!(resolution.mode, ResolveMode::Expanded);

    let mut names: Vec<String> = resolution
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.dat", "b.dat"]);
    assert!(resolution.files.iter().all(|f| f.expanded));
}

#[test]
fn test_directory_without_filter_lists_all_files() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.dat"), "a");
    touch(&tmp.path().join("c.txt"), "c");

    let resolution = resolve(&LocalFs, tmp.path().to_str().unwrap(), None).unwrap();
    assert_eq!(resolution.len(), 2);
}

#[test]
fn test_glob_expansion_matches_files() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.dat"), "a");
    touch(&tmp.path().join("b.dat"), "b");
    touch(&tmp.path().join("c.txt"), "c");

    let pattern = tmp.path().join("*.dat");
    let resolution = resolve(&LocalFs, pattern.to_str().unwrap(), None).unwrap();
    assert_eq!(resolution.mode, ResolveMode::Expanded);
    assert_eq!(resolution.len(), 2);
}

#[test]
fn test_glob_results_are_alphabetical() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("b.dat"), "b");
    touch(&tmp.path().join("a.dat"), "a");
    touch(&tmp.path().join("c.dat"), "c");

    let pattern = tmp.path().join("*.dat");
    let resolution = resolve(&LocalFs, pattern.to_str().unwrap(), None).unwrap();
    let names: Vec<String> = resolution
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.dat", "b.dat", "c.dat"]);
}

#[test]
fn test_glob_with_no_matches_is_empty_not_error() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("c.txt"), "c");

    let pattern = tmp.path().join("*.dat");
    let resolution = resolve(&LocalFs, pattern.to_str().unwrap(), None).unwrap();
    assert_eq!(resolution.mode, ResolveMode::Expanded);
    assert!(resolution.is_empty());
}

#[test]
fn test_subdirectories_are_excluded() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.dat"), "a");
    fs::create_dir(tmp.path().join("nested.dat")).unwrap();
    touch(&tmp.path().join("nested.dat/inner.dat"), "inner");

    let resolution = resolve(&LocalFs, tmp.path().to_str().unwrap(), Some(r".*\.dat")).unwrap();
    assert_eq!(resolution.len(), 1);
    assert!(resolution.files[0].path.ends_with("a.dat"));
}

#[test]
fn test_missing_literal_path_is_unreadable() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let error = resolve(&LocalFs, missing.to_str().unwrap(), None).unwrap_err();
    assert!(matches!(error, ConvertError::SourceUnreadable { .. }));
}

#[test]
fn test_invalid_filter_is_rechecked() {
    let tmp = tempdir().unwrap();
    touch(&tmp.path().join("a.dat"), "a");

    let error = resolve(&LocalFs, tmp.path().to_str().unwrap(), Some("*")).unwrap_err();
    assert!(matches!(error, ConvertError::FilterPatternInvalid { .. }));
}
