//! File search below a directory

use crate::error::{JekyllError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names skipped when looking for templates
pub const TEMPLATE_EXCLUDES: [&str; 2] = ["node_modules", "archetypes"];

/// Lists files below a directory
pub trait FileSearch {
    /// All regular files under `dir` (recursively), skipping any directory
    /// whose name is in `excluded_dirs`. A missing `dir` yields no files.
    fn find_files(&self, dir: &Path, excluded_dirs: &[&str]) -> Result<Vec<PathBuf>>;
}

/// FileSearch implementation backed by walkdir
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirSearch;

impl WalkDirSearch {
    fn is_excluded(entry: &DirEntry, excluded_dirs: &[&str]) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| excluded_dirs.contains(&name))
    }
}

impl FileSearch for WalkDirSearch {
    fn find_files(&self, dir: &Path, excluded_dirs: &[&str]) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .into_iter()
            .filter_entry(|e| !Self::is_excluded(e, excluded_dirs))
        {
            let entry = entry.map_err(|e| {
                JekyllError::Template(format!("Failed to search {}: {}", dir.display(), e))
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nested_files_sorted() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("_templates");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("post.md"), "").unwrap();
        fs::write(dir.join("sub").join("draft.md"), "").unwrap();

        let files = WalkDirSearch.find_files(&dir, &TEMPLATE_EXCLUDES).unwrap();
        assert_eq!(files, vec![dir.join("post.md"), dir.join("sub").join("draft.md")]);
    }

    #[test]
    fn test_skips_excluded_directories() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("_templates");
        fs::create_dir_all(dir.join("node_modules").join("pkg")).unwrap();
        fs::create_dir_all(dir.join("archetypes")).unwrap();
        fs::write(dir.join("node_modules").join("pkg").join("x.md"), "").unwrap();
        fs::write(dir.join("archetypes").join("default.md"), "").unwrap();
        fs::write(dir.join("post.md"), "").unwrap();

        let files = WalkDirSearch.find_files(&dir, &TEMPLATE_EXCLUDES).unwrap();
        assert_eq!(files, vec![dir.join("post.md")]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = WalkDirSearch
            .find_files(&temp.path().join("missing"), &TEMPLATE_EXCLUDES)
            .unwrap();
        assert!(files.is_empty());
    }
}
