use crate::domain::artifact::ContractArtifact;
use crate::domain::config::ExtractorConfig;
use crate::domain::filter::ArtifactFilter;
use crate::ports::{FileTree, ProgressReporter};
use anyhow::Result;
use std::path::PathBuf;

/// One ABI file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAbi {
    pub contract: String,
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub generated: Vec<GeneratedAbi>,
    pub skipped_debug: usize,
    pub skipped_without_abi: usize,
}

/// Walk the artifact tree and write every `abi` field to its own file.
///
/// A single sequential pass: the first unreadable or malformed artifact aborts
/// the run, leaving files written so far in place.
pub struct ExtractAbiUsecase<'a> {
    pub tree: &'a dyn FileTree,
    pub reporter: &'a dyn ProgressReporter,
    pub config: &'a ExtractorConfig,
}

impl<'a> ExtractAbiUsecase<'a> {
    pub fn run(&self) -> Result<ExtractionSummary> {
        let filter = ArtifactFilter::from_config(self.config);
        let output_dir = &self.config.output_dir;

        self.tree.ensure_dir(output_dir)?;

        let mut files: Vec<PathBuf> = self
            .tree
            .list_files(&self.config.input_dir)?
            .into_iter()
            .filter(|path| filter.has_artifact_extension(path))
            .collect();
        files.sort();

        let mut summary = ExtractionSummary::default();

        for path in files {
            if filter.is_debug_artifact(&path) {
                log::debug!("Skipping debug artifact {}", path.display());
                summary.skipped_debug += 1;
                continue;
            }

            let contents = self.tree.read_to_string(&path)?;
            let artifact = ContractArtifact::parse(&path, &contents)?;

            let Some(doc) = artifact.into_abi_document() else {
                log::debug!("No ABI in {}", path.display());
                summary.skipped_without_abi += 1;
                continue;
            };

            let output = output_dir.join(doc.file_name());
            self.tree.write(&output, &doc.to_pretty_json()?)?;

            self.reporter.abi_generated(&doc.contract, &output);

            summary.generated.push(GeneratedAbi {
                contract: doc.contract,
                source: path,
                output,
            });
        }

        log::debug!(
            "Extracted {} ABI(s) into {} ({} debug artifact(s) skipped, {} without ABI)",
            summary.generated.len(),
            output_dir.display(),
            summary.skipped_debug,
            summary.skipped_without_abi
        );

        Ok(summary)
    }
}
