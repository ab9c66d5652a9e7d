// Main library entry point for the ABI extractor.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
