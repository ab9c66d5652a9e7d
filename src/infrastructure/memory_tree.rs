use crate::ports::FileTree;
use anyhow::{anyhow, bail, Result};
use dashmap::{DashMap, DashSet};
use std::path::{Path, PathBuf};

// ============================================================================
// MemoryFileTree - In-memory file tree for tests and benchmarks
// ============================================================================

/// Paths are compared lexically; the empty path stands for the working directory,
/// which always exists.
pub struct MemoryFileTree {
    pub files: DashMap<PathBuf, String>,
    pub dirs: DashSet<PathBuf>,
    /// Every path handed to `read_to_string`.
    pub reads: DashSet<PathBuf>,
}

impl Default for MemoryFileTree {
    fn default() -> Self {
        Self {
            files: DashMap::new(),
            dirs: DashSet::new(),
            reads: DashSet::new(),
        }
    }
}

impl MemoryFileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, creating any missing parent directories.
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            parent = dir.parent();
        }
        self.files.insert(path, contents.into());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.get(path.as_ref()).map(|r| r.clone())
    }

    pub fn was_read(&self, path: impl AsRef<Path>) -> bool {
        self.reads.contains(path.as_ref())
    }

    fn dir_exists(&self, dir: &Path) -> bool {
        dir.as_os_str().is_empty() || self.dirs.contains(dir)
    }
}

impl FileTree for MemoryFileTree {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if self.dirs.contains(dir) {
            return Ok(());
        }
        if self.files.contains_key(dir) {
            bail!("Output path {} exists and is not a directory", dir.display());
        }
        let parent = dir.parent().unwrap_or_else(|| Path::new(""));
        if !self.dir_exists(parent) {
            bail!(
                "Failed to create directory {}: parent does not exist",
                dir.display()
            );
        }
        self.dirs.insert(dir.to_path_buf());
        Ok(())
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.dir_exists(root) {
            bail!("Failed to read directory {}: not found", root.display());
        }
        Ok(self
            .files
            .iter()
            .filter(|entry| entry.key().starts_with(root))
            .map(|entry| entry.key().clone())
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.reads.insert(path.to_path_buf());
        self.get(path)
            .ok_or_else(|| anyhow!("Failed to read file {}: not found", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !self.dir_exists(parent) {
            bail!(
                "Failed to write file {}: directory does not exist",
                path.display()
            );
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_creates_parents() {
        let tree = MemoryFileTree::new();
        tree.add_file("out/Token.sol/Token.json", "{}");
        assert!(tree.dirs.contains(Path::new("out")));
        assert!(tree.dirs.contains(Path::new("out/Token.sol")));
    }

    #[test]
    fn test_list_files_scoped_to_root() {
        let tree = MemoryFileTree::new();
        tree.add_file("out/A.json", "{}");
        tree.add_file("out/nested/B.json", "{}");
        tree.add_file("other/C.json", "{}");

        let mut files = tree.list_files(Path::new("out")).unwrap();
        files.sort();
        assert_eq!(
            files,
            vec![PathBuf::from("out/A.json"), PathBuf::from("out/nested/B.json")]
        );
    }

    #[test]
    fn test_list_files_missing_root_fails() {
        let tree = MemoryFileTree::new();
        assert!(tree.list_files(Path::new("out")).is_err());
    }

    #[test]
    fn test_ensure_dir_requires_parent() {
        let tree = MemoryFileTree::new();
        assert!(tree.ensure_dir(Path::new("abi")).is_ok());
        assert!(tree.ensure_dir(Path::new("abi")).is_ok());
        assert!(tree.ensure_dir(Path::new("missing/abi")).is_err());
    }

    #[test]
    fn test_ensure_dir_rejects_file_collision() {
        let tree = MemoryFileTree::new();
        tree.add_file("abi", "occupied");
        assert!(tree.ensure_dir(Path::new("abi")).is_err());
    }

    #[test]
    fn test_write_requires_existing_dir() {
        let tree = MemoryFileTree::new();
        assert!(tree.write(Path::new("abi/Token.json"), "[]").is_err());
        tree.ensure_dir(Path::new("abi")).unwrap();
        tree.write(Path::new("abi/Token.json"), "[]").unwrap();
        assert_eq!(tree.get("abi/Token.json").as_deref(), Some("[]"));
    }

    #[test]
    fn test_reads_are_recorded() {
        let tree = MemoryFileTree::new();
        tree.add_file("out/A.json", "{}");
        tree.read_to_string(Path::new("out/A.json")).unwrap();
        assert!(tree.was_read("out/A.json"));
        assert!(!tree.was_read("out/B.json"));
    }
}
