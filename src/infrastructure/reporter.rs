use crate::ports::ProgressReporter;
use std::path::Path;

/// Prints the `Generated ABI for <name>` line the CLI shows for each file.
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn abi_generated(&self, contract: &str, _output: &Path) {
        println!("{}", notice(contract));
    }
}

/// Discards notices (benchmarks, library callers that only want the summary).
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn abi_generated(&self, _contract: &str, _output: &Path) {}
}

pub fn notice(contract: &str) -> String {
    format!("Generated ABI for {}", contract)
}
