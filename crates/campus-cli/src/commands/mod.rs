//! CLI command implementations

pub mod completions;
pub mod config;
pub mod paths;
pub mod repl;
pub mod show;
