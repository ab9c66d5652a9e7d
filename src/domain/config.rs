/// Extractor Configuration
///
/// The four knobs of an extraction run. Defaults match the conventional
/// compiler layout: artifacts under `out/`, ABIs written to `abi/`.

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "out";
pub const DEFAULT_OUTPUT_DIR: &str = "abi";
pub const DEFAULT_FILE_EXTENSION: &str = "json";
pub const DEFAULT_DEBUG_MARKER: &str = ".dbg.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Root of the build-output tree, scanned recursively.
    pub input_dir: PathBuf,
    /// Directory receiving one `<contract>.json` per artifact.
    pub output_dir: PathBuf,
    /// Artifact file extension, without the leading dot.
    pub file_extension: String,
    /// Any path containing this substring is treated as a debug artifact.
    pub debug_marker: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            debug_marker: DEFAULT_DEBUG_MARKER.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Strip a user-supplied leading dot from the extension (`.json` -> `json`).
    pub fn normalized(mut self) -> Self {
        if let Some(stripped) = self.file_extension.strip_prefix('.') {
            self.file_extension = stripped.to_string();
        }
        self
    }
}
