//! Candidate file discovery
//!
//! Walks a directory tree in filesystem order collecting the C++ sources
//! the detector should look at. A traversal failure stops the walk where
//! it happened; everything discovered up to that point is still scanned.
//!
//! @module scan/walker

use std::path::{Path, PathBuf};
use tracing::error;
use walkdir::WalkDir;

/// Walks a directory tree for C++ source files
pub struct FileWalker {
    root: PathBuf,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Discover candidate files under the root.
    ///
    /// Regular files only, visited in filesystem order. On a traversal
    /// error the walk aborts at the point of failure and the files
    /// gathered so far are returned; the failure is logged, not fatal.
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    error!("Traversal aborted: {err}");
                    break;
                }
            };

            if entry.file_type().is_file() && Self::is_cpp_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Extension check is exact and case-sensitive: `.CPP` is not a
    /// candidate
    fn is_cpp_file(path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        matches!(ext, "cpp" | "h" | "hpp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, rel: &str) -> PathBuf {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn finds_cpp_sources_recursively() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.cpp");
        let b = touch(&dir, "nested/deep/b.hpp");
        let c = touch(&dir, "nested/c.h");
        touch(&dir, "README.md");
        touch(&dir, "main.rs");

        let mut found = FileWalker::new(dir.path()).discover();
        found.sort();
        let mut expected = vec![a, b, c];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "shouty.CPP");
        touch(&dir, "header.HPP");
        let lower = touch(&dir, "ok.cpp");

        let found = FileWalker::new(dir.path()).discover();
        assert_eq!(found, vec![lower]);
    }

    #[test]
    fn no_extension_or_unrelated_extension_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "Makefile");
        touch(&dir, "notes.cc");
        touch(&dir, "cpp"); // a file literally named "cpp"

        assert!(FileWalker::new(dir.path()).discover().is_empty());
    }

    #[test]
    fn missing_root_yields_no_files() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(FileWalker::new(&gone).discover().is_empty());
    }
}
