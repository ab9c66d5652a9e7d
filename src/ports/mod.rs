use anyhow::Result;
use std::path::{Path, PathBuf};

/// Filesystem seam for the extractor.
/// Implementations must be thread-safe (Send + Sync).
pub trait FileTree: Send + Sync {
    /// Create `dir` without creating missing parents. An existing directory is fine;
    /// an existing non-directory at that path is an error.
    fn ensure_dir(&self, dir: &Path) -> Result<()>;

    /// Every regular file under `root`, at any depth, in no particular order.
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to `path`, replacing whatever was there.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Receives one notice per ABI file written, as it is written.
pub trait ProgressReporter {
    fn abi_generated(&self, contract: &str, output: &Path);
}
