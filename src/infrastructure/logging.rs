/// Logger setup for the `generate-abi` binary.

use anyhow::Result;
use log::LevelFilter;

/// Install the global logger. Debug output (skipped files, per-file detail)
/// only shows up when `verbose` is set.
pub fn init_logger(verbose: bool) -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(level_for(verbose))
        .without_timestamps()
        .init()?;
    Ok(())
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
