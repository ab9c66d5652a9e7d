// Command-line entry point for the ABI extractor.

use abi_extract::application::ExtractAbiUsecase;
use abi_extract::domain::config::ExtractorConfig;
use abi_extract::infrastructure::config_loader::load_config;
use abi_extract::infrastructure::logging::init_logger;
use abi_extract::infrastructure::{DiskFileTree, StdoutReporter};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Copy the `abi` field of every compiler artifact into its own JSON file.
#[derive(Parser, Debug)]
#[command(name = "generate-abi", author, version, about, long_about = None)]
struct Cli {
    /// Build-output directory to scan [default: out]
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory the ABI files are written to [default: abi]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Artifact file extension [default: json]
    #[arg(long)]
    extension: Option<String>,

    /// Paths containing this substring are skipped [default: .dbg.]
    #[arg(long)]
    debug_marker: Option<String>,

    /// TOML file providing any of the options above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then explicit flags.
    fn resolve_config(&self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ExtractorConfig::default(),
        };

        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ext) = &self.extension {
            config.file_extension = ext.clone();
        }
        if let Some(marker) = &self.debug_marker {
            config.debug_marker = marker.clone();
        }

        Ok(config.normalized())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    let config = cli.resolve_config()?;
    log::debug!("Resolved configuration: {:?}", config);

    let usecase = ExtractAbiUsecase {
        tree: &DiskFileTree,
        reporter: &StdoutReporter,
        config: &config,
    };
    usecase.run()?;

    Ok(())
}
