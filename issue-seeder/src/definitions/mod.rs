//! Locating and reading issue-definition files.
//!
//! Definition files live in a single directory (conventionally `.github/`)
//! and are named `ISSUES_PHASE*.md`, e.g. `ISSUES_PHASE3.md` or
//! `ISSUES_PHASE4_5.md`. Files are processed in sorted name order so that a
//! run is deterministic regardless of directory iteration order.

mod error;

pub use error::DefinitionError;

use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name prefix that marks a file as an issue-definition file.
const DEFINITION_PREFIX: &str = "ISSUES_PHASE";

/// Scans a directory for issue-definition files.
///
/// Only the directory itself is searched; subdirectories are ignored.
/// Returns matching paths sorted by file name. An empty result is not an
/// error at this level; the runner decides whether that is fatal.
///
/// # Errors
///
/// Returns [`DefinitionError::MissingDirectory`] when the directory does not
/// exist, or [`DefinitionError::IoError`] when it cannot be read.
pub fn scan_definition_files(dir: &Path) -> Result<Vec<PathBuf>, DefinitionError> {
    info!(path = %dir.display(), "Scanning for definition files");

    if !dir.is_dir() {
        return Err(DefinitionError::MissingDirectory {
            path: dir.display().to_string(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| DefinitionError::IoError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DefinitionError::IoError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let path = entry.path();
        if path.is_file() && is_definition_file(&path) {
            debug!(path = %path.display(), "Found definition file");
            files.push(path);
        }
    }

    files.sort();
    info!(count = files.len(), "Definition file scan complete");
    Ok(files)
}

/// Reads a definition file to a string.
///
/// # Errors
///
/// Returns [`DefinitionError::IoError`] when the file cannot be read.
pub fn load_definition_file(path: &Path) -> Result<String, DefinitionError> {
    std::fs::read_to_string(path).map_err(|e| DefinitionError::IoError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Checks whether a path names a definition file (`ISSUES_PHASE*.md`).
fn is_definition_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name,
        None => return false,
    };

    name.starts_with(DEFINITION_PREFIX) && name.ends_with(".md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_finds_definition_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ISSUES_PHASE4_5.md"), "").unwrap();
        fs::write(temp.path().join("ISSUES_PHASE3.md"), "").unwrap();
        fs::write(temp.path().join("ISSUES_PHASE6_7.md"), "").unwrap();

        let files = scan_definition_files(temp.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["ISSUES_PHASE3.md", "ISSUES_PHASE4_5.md", "ISSUES_PHASE6_7.md"]
        );
    }

    #[test]
    fn scan_ignores_non_matching_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();
        fs::write(temp.path().join("ISSUES_PHASE3.txt"), "").unwrap();
        fs::write(temp.path().join("notes_ISSUES_PHASE3.md"), "").unwrap();
        fs::write(temp.path().join("ISSUES_PHASE3.md"), "").unwrap();

        let files = scan_definition_files(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("ISSUES_PHASE3.md")).unwrap();

        let files = scan_definition_files(temp.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn scan_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nonexistent");

        let result = scan_definition_files(&missing);
        assert!(matches!(
            result,
            Err(DefinitionError::MissingDirectory { .. })
        ));
    }

    #[test]
    fn scan_empty_directory() {
        let temp = TempDir::new().unwrap();

        let files = scan_definition_files(temp.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn load_reads_file_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ISSUES_PHASE3.md");
        fs::write(&path, "## Issue #1: Test").unwrap();

        let contents = load_definition_file(&path).unwrap();
        assert_eq!(contents, "## Issue #1: Test");
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.md");

        let result = load_definition_file(&path);
        assert!(matches!(result, Err(DefinitionError::IoError { .. })));
    }
}
