use crate::ports::FileTree;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `FileTree` over the real filesystem.
pub struct DiskFileTree;

impl DiskFileTree {
    fn collect_files_recursive(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            // file_type() does not follow symlinks: linked directories are not descended into
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                Self::collect_files_recursive(&path, out)?;
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                out.push(path);
            }
        }
        Ok(())
    }
}

impl FileTree for DiskFileTree {
    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        if dir.exists() {
            bail!("Output path {} exists and is not a directory", dir.display());
        }
        fs::create_dir(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::collect_files_recursive(root, &mut files)?;
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_files_recurses() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.json"), "{}").unwrap();
        fs::write(nested.join("deep.json"), "{}").unwrap();

        let mut files = DiskFileTree.list_files(dir.path()).unwrap();
        files.sort();

        assert_eq!(files, vec![nested.join("deep.json"), dir.path().join("top.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_not_followed() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("Token.json"), "{}").unwrap();
        symlink(&out, out.join("loop")).unwrap();

        let files = DiskFileTree.list_files(&out).unwrap();

        assert_eq!(files, vec![out.join("Token.json")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_listed() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(dir.path().join("Shared.json"), "{}").unwrap();
        symlink(dir.path().join("Shared.json"), out.join("Shared.json")).unwrap();

        let files = DiskFileTree.list_files(&out).unwrap();

        assert_eq!(files, vec![out.join("Shared.json")]);
    }

    #[test]
    fn test_list_files_missing_root_fails() {
        let dir = tempdir().unwrap();
        assert!(DiskFileTree.list_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("abi");

        DiskFileTree.ensure_dir(&out).unwrap();
        DiskFileTree.ensure_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn test_ensure_dir_does_not_create_parents() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("missing/abi");
        assert!(DiskFileTree.ensure_dir(&out).is_err());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_ensure_dir_rejects_file_collision() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("abi");
        fs::write(&out, "not a directory").unwrap();
        assert!(DiskFileTree.ensure_dir(&out).is_err());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Token.json");
        DiskFileTree.write(&path, "[1, 2, 3]").unwrap();
        DiskFileTree.write(&path, "[]").unwrap();
        assert_eq!(DiskFileTree.read_to_string(&path).unwrap(), "[]");
    }
}
