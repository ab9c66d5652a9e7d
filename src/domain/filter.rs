/// Artifact Filter
///
/// Decides which files under the input tree are primary contract artifacts.
/// Debug artifacts share the extension and naming convention, so they are
/// told apart by a plain substring test on the full path.

use crate::domain::config::ExtractorConfig;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFilter {
    extension: String,
    debug_marker: String,
}

impl ArtifactFilter {
    pub fn new(extension: impl Into<String>, debug_marker: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            debug_marker: debug_marker.into(),
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        let config = config.clone().normalized();
        Self::new(config.file_extension, config.debug_marker)
    }

    /// Exact, case-sensitive match on the final extension.
    pub fn has_artifact_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext == self.extension)
    }

    /// Substring containment anywhere in the path, directories included.
    pub fn is_debug_artifact(&self, path: &Path) -> bool {
        if self.debug_marker.is_empty() {
            return false;
        }
        path.to_string_lossy().contains(self.debug_marker.as_str())
    }

    pub fn is_candidate(&self, path: &Path) -> bool {
        self.has_artifact_extension(path) && !self.is_debug_artifact(path)
    }
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}
