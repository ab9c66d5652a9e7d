pub mod artifact;
pub mod config;
pub mod filter;
pub mod json_format;
