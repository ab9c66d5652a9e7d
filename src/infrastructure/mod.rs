// Infrastructure implementations for the ABI extractor.

pub mod config_loader;
pub mod disk_tree;
pub mod logging;
pub mod memory_tree;
pub mod reporter;

pub use disk_tree::DiskFileTree;
pub use memory_tree::MemoryFileTree;
pub use reporter::{SilentReporter, StdoutReporter};
