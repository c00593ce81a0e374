//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `clean`: Normalize one or more paths
//! - `join`: Join two path fragments
//! - `absolute`: Anchor a path at the working directory
//! - `cwd`: Print the working directory
//! - `separator`: Print the canonical separator
//! - `split`: Decompose a path into directory, basename and extension
//! - `stat`: Report what exists at a path
//! - `ls`: List the files and folders of a directory
//! - `config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod absolute;
pub mod clean;
pub mod completions;
pub mod config;
pub mod cwd;
pub mod join;
pub mod ls;
pub mod separator;
pub mod split;
pub mod stat;

pub use absolute::AbsoluteCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use config::ConfigCommand;
pub use cwd::CwdCommand;
pub use join::JoinCommand;
pub use ls::LsCommand;
pub use separator::SeparatorCommand;
pub use split::SplitCommand;
pub use stat::StatCommand;
