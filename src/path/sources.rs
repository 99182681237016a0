// Copyright (C) 2026 Checkmk GmbH - License: GNU General Public License v2
// This file is part of Checkmk (https://checkmk.com). It is subject to the terms and
// conditions defined in the file COPYING, which is part of this source code package.

//! Discovers source files under a directory and maps them to paths relative to
//! their common prefix. Uses the `walkdir` crate for directory traversal.

use path_clean::PathClean;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{common_path, replace_base_path};

/// Result type for source discovery.
pub type SourcesResult<T> = std::result::Result<T, SourcesError>;

/// Errors that can occur while discovering source files.
#[derive(Debug, Error)]
pub enum SourcesError {
    #[error("Source root is not a directory: {path:?}")]
    NotADirectory { path: PathBuf },
    #[error("Failed to walk source directory: {path:?}")]
    WalkDirFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("Source path is not valid UTF-8: {path:?}")]
    NonUtf8Path { path: PathBuf },
}

/// Regular files found under a root directory, sorted by path.
#[derive(Debug, Clone, Serialize)]
pub struct SourceFiles {
    root: PathBuf,
    files: Vec<String>,
}

impl SourceFiles {
    /// Walk `root` and collect regular files, optionally only those with `extension`.
    ///
    /// The extension is compared case-insensitively and may be given with or without
    /// a leading dot. Symlinks are not followed.
    ///
    /// # Errors
    /// Returns an error if `root` is not a directory, cannot be walked, or contains
    /// a path that is not valid UTF-8.
    pub fn discover<P: AsRef<Path>>(root: P, extension: Option<&str>) -> SourcesResult<Self> {
        let root = root.as_ref().clean();
        if !root.is_dir() {
            return Err(SourcesError::NotADirectory { path: root });
        }

        let extension = extension.map(|ext| ext.trim_start_matches('.'));
        let mut files = Vec::new();
        for entry in WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(|e| SourcesError::WalkDirFailed {
                path: root.clone(),
                source: e,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(extension) = extension {
                if !has_extension(entry.path(), extension) {
                    continue;
                }
            }
            let path = entry
                .path()
                .to_str()
                .ok_or_else(|| SourcesError::NonUtf8Path {
                    path: entry.path().to_path_buf(),
                })?;
            files.push(path.to_string());
        }
        files.sort();

        log::debug!(
            "Discovered source files: root={}, files={}",
            root.display(),
            files.len()
        );
        Ok(Self { root, files })
    }

    /// Get the cleaned root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the discovered file paths.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Common path prefix of all discovered files.
    #[must_use]
    pub fn common_path(&self) -> String {
        common_path(&self.files)
    }

    /// Each file with the common path prefix replaced by a single separator.
    #[must_use]
    pub fn relative_paths(&self) -> Vec<String> {
        let base = self.common_path();
        self.files
            .iter()
            .map(|file| replace_base_path(file, &base))
            .collect()
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PATH_SEPARATOR;
    use std::fs;
    use tempfile::TempDir;

    fn create_tree(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "content").unwrap();
        }
        dir
    }

    fn sep(path: &str) -> String {
        path.replace('/', &PATH_SEPARATOR.to_string())
    }

    #[test]
    fn test_discover_all_files() {
        let dir = create_tree(&["src/a.json", "src/nested/b.json", "src/c.txt"]);
        let sources = SourceFiles::discover(dir.path(), None).unwrap();
        assert_eq!(sources.files().len(), 3);
        assert!(!sources.is_empty());
    }

    #[test]
    fn test_discover_filters_extension() {
        let dir = create_tree(&["src/a.json", "src/nested/b.JSON", "src/c.txt"]);
        let sources = SourceFiles::discover(dir.path(), Some(".json")).unwrap();
        assert_eq!(sources.files().len(), 2);
        assert!(sources.files().iter().all(|f| !f.ends_with("c.txt")));
    }

    #[test]
    fn test_relative_paths_preserve_hierarchy() {
        let dir = create_tree(&["src/a.json", "src/nested/b.json"]);
        let sources = SourceFiles::discover(dir.path(), Some("json")).unwrap();

        let common = sources.common_path();
        assert!(common.ends_with(&sep("/src/")), "unexpected common path {common}");
        assert_eq!(
            sources.relative_paths(),
            vec![sep("/a.json"), sep("/nested/b.json")]
        );
    }

    #[test]
    fn test_single_file_relative_to_its_directory() {
        let dir = create_tree(&["src/deep/only.json"]);
        let sources = SourceFiles::discover(dir.path(), None).unwrap();
        assert!(sources.common_path().ends_with(&sep("/src/deep")));
        assert_eq!(sources.relative_paths(), vec![sep("/only.json")]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let sources = SourceFiles::discover(dir.path(), None).unwrap();
        assert!(sources.is_empty());
        assert_eq!(sources.common_path(), "");
        assert!(sources.relative_paths().is_empty());
    }

    #[test]
    fn test_root_is_cleaned() {
        let dir = create_tree(&["src/a.json"]);
        let unclean = dir.path().join("src").join("..").join("src");
        let sources = SourceFiles::discover(&unclean, None).unwrap();
        assert_eq!(sources.root(), dir.path().join("src"));
    }

    #[test]
    fn test_root_not_a_directory() {
        let dir = create_tree(&["file.txt"]);
        let result = SourceFiles::discover(dir.path().join("file.txt"), None);
        assert!(matches!(result, Err(SourcesError::NotADirectory { .. })));
        let result = SourceFiles::discover("/nonexistent/sources", None);
        assert!(result.is_err());
    }
}
